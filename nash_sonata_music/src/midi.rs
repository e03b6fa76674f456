// MIDI output from note timelines.
//
// Converts a rendered `NoteEvent` list into a Standard MIDI File: format 0,
// one track, metrical timing at the configured resolution. The track starts
// with an optional name and a tempo meta event, then every note becomes a
// note-on at its start tick and a note-off at its end tick.
//
// Ordering: messages are sorted by tick; at the same tick note-offs come
// before note-ons, and otherwise the timeline's append order is kept. A
// chord therefore serializes as all of its note-ons followed, `duration`
// ticks later, by all of its note-offs, and a chord ending where the next
// one begins is released before the next one sounds.
//
// Uses the `midly` crate for MIDI writing.

use crate::config::RenderConfig;
use crate::error::MusicError;
use crate::timeline::NoteEvent;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Largest tick a MIDI delta time can reach (28 bits).
const MAX_TICK: u32 = (1 << 28) - 1;

/// A note-on or note-off at an absolute tick.
#[derive(Debug, Clone, Copy)]
struct Message {
    tick: u32,
    release: bool,
    channel: u8,
    key: u8,
    vel: u8,
}

/// Flatten events into on/off messages in playback order.
fn messages(events: &[NoteEvent]) -> Result<Vec<Message>, MusicError> {
    let mut out = Vec::with_capacity(events.len() * 2);
    for event in events {
        let key = u8::try_from(event.pitch)
            .ok()
            .filter(|&k| k <= 127)
            .ok_or(MusicError::PitchOutOfRange {
                pitch: event.pitch,
                tick: event.start,
            })?;
        if event.channel > 15 {
            return Err(MusicError::ChannelOutOfRange {
                channel: event.channel,
                tick: event.start,
            });
        }
        if event.velocity > 127 {
            return Err(MusicError::VelocityOutOfRange {
                velocity: event.velocity,
                tick: event.start,
            });
        }
        let end = event
            .start
            .checked_add(event.duration)
            .filter(|&t| t <= MAX_TICK)
            .ok_or(MusicError::TickOutOfRange { tick: event.start })?;
        if event.duration == 0 {
            // Nothing would sound, and its note-off would sort before its note-on.
            log::debug!("skipping zero-length note {} at tick {}", key, event.start);
            continue;
        }

        out.push(Message {
            tick: event.start,
            release: false,
            channel: event.channel,
            key,
            vel: event.velocity,
        });
        out.push(Message {
            tick: end,
            release: true,
            channel: event.channel,
            key,
            vel: 0,
        });
    }
    out.sort_by_key(|m| (m.tick, !m.release));
    Ok(out)
}

/// Convert a timeline to an in-memory SMF.
pub fn events_to_smf<'a>(
    events: &[NoteEvent],
    title: &'a str,
    config: &RenderConfig,
) -> Result<Smf<'a>, MusicError> {
    if !(1..=0x7FFF).contains(&config.ticks_per_beat) {
        return Err(MusicError::ResolutionOutOfRange {
            ticks_per_beat: config.ticks_per_beat,
        });
    }
    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(config.ticks_per_beat)),
    ));

    let mut track: Track<'a> = Vec::new();
    if config.track_name {
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::TrackName(title.as_bytes())),
        });
    }
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(config.tempo_micros()))),
    });

    let mut last_tick: u32 = 0;
    for m in messages(events)? {
        let message = if m.release {
            MidiMessage::NoteOff {
                key: u7::new(m.key),
                vel: u7::new(m.vel),
            }
        } else {
            MidiMessage::NoteOn {
                key: u7::new(m.key),
                vel: u7::new(m.vel),
            }
        };
        track.push(TrackEvent {
            delta: u28::new(m.tick - last_tick),
            kind: TrackEventKind::Midi {
                channel: u4::new(m.channel),
                message,
            },
        });
        last_tick = m.tick;
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);
    Ok(smf)
}

/// Encode a timeline as SMF bytes.
pub fn encode_midi(
    events: &[NoteEvent],
    title: &str,
    config: &RenderConfig,
) -> Result<Vec<u8>, MusicError> {
    let smf = events_to_smf(events, title, config)?;
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    Ok(buf)
}

/// Encode a timeline and write it to `path`.
pub fn write_midi(
    events: &[NoteEvent],
    title: &str,
    config: &RenderConfig,
    path: &Path,
) -> Result<(), MusicError> {
    let buf = encode_midi(events, title, config)?;
    std::fs::write(path, &buf)?;
    Ok(())
}
