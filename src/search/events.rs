//! # Events and the event sink
//!
//! An [`Event`] is a message, a fractional grid time and a set of [`EventFlags`]. The
//! [`EventSink`] of a search pass gates each event on the Sun's elevation at its time,
//! refuses to grow past its capacity, and finally orders the survivors: significant events
//! first, then by time.

use std::fmt;

use hifitime::Epoch;

use crate::almanac_errors::AlmanacError;
use crate::constants::{Degree, SampleTime, NPTS, SAMPLE_COUNT};
use crate::ephemeris::SamplingWindow;
use crate::ref_system::PositionSample;
use crate::search::GatingThresholds;
use crate::time::day_to_epoch;

/// Elevation reported for times outside the window
const OUTSIDE_WINDOW_ELEVATION: Degree = -90.0;

/// Sort offset that moves significant events ahead of the others
const SIGNIFICANCE_OFFSET: f64 = 1000.0;

/// Qualifiers of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFlags {
    /// Dropped when the Sun is above the darkness threshold
    pub requires_darkness: bool,
    /// Dropped when the Sun is below the daylight threshold
    pub requires_sunlight: bool,
    /// Listed ahead of ordinary events
    pub significant: bool,
    /// The event time is meaningful and printed
    pub timed: bool,
}

impl EventFlags {
    /// No qualifier.
    pub const NONE: EventFlags = EventFlags {
        requires_darkness: false,
        requires_sunlight: false,
        significant: false,
        timed: false,
    };

    /// A timed event.
    pub const TIMED: EventFlags = EventFlags {
        timed: true,
        ..EventFlags::NONE
    };

    /// A significant event without time.
    pub const SIGNIFICANT: EventFlags = EventFlags {
        significant: true,
        ..EventFlags::NONE
    };

    pub fn significant(self) -> Self {
        EventFlags {
            significant: true,
            ..self
        }
    }

    pub fn in_darkness(self) -> Self {
        EventFlags {
            requires_darkness: true,
            ..self
        }
    }

    pub fn in_sunlight(self) -> Self {
        EventFlags {
            requires_sunlight: true,
            ..self
        }
    }
}

/// One event of a search pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub message: String,
    /// Fractional grid index of the event, 0 when the event has no time of its own
    pub time: SampleTime,
    pub flags: EventFlags,
    /// Calendar instant of a timed event, filled when the pass is flushed
    pub epoch: Option<Epoch>,
}

impl Event {
    pub fn new(message: impl Into<String>, time: SampleTime, flags: EventFlags) -> Self {
        Event {
            message: message.into(),
            time,
            flags,
            epoch: None,
        }
    }

    /// An event with neither time nor qualifier.
    pub fn plain(message: impl Into<String>) -> Self {
        Event::new(message, 0.0, EventFlags::NONE)
    }

    fn sort_key(&self) -> f64 {
        if self.flags.significant {
            self.time - SIGNIFICANCE_OFFSET
        } else {
            self.time
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.epoch {
            Some(epoch) => write!(f, "{} at {}", self.message, epoch),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Collector of the events of one search pass.
#[derive(Debug, Clone)]
pub struct EventSink {
    events: Vec<Event>,
    capacity: usize,
    gating: GatingThresholds,
    sun_elevation: [Degree; SAMPLE_COUNT],
}

impl EventSink {
    /// Build an empty sink.
    ///
    /// Arguments
    /// ---------
    /// * `sun`: the Sun's samples of the window, used for gating.
    /// * `gating`: darkness and daylight thresholds.
    /// * `capacity`: largest number of buffered events.
    pub fn new(sun: &[PositionSample; SAMPLE_COUNT], gating: GatingThresholds, capacity: usize) -> Self {
        EventSink {
            events: Vec::new(),
            capacity,
            gating,
            sun_elevation: sun.map(|s| s.el),
        }
    }

    /// Elevation of the Sun at a fractional grid time, linearly interpolated.
    ///
    /// Times before the first sample or after the last interval read as −90°.
    pub fn sun_elevation(&self, t: SampleTime) -> Degree {
        // truncation toward zero, as an integer cast
        let i = t.trunc();
        if i < 0.0 || i > NPTS as f64 {
            return OUTSIDE_WINDOW_ELEVATION;
        }
        let i = i as usize;
        let (e1, e2) = (self.sun_elevation[i], self.sun_elevation[i + 1]);
        e1 + (t - i as f64) * (e2 - e1)
    }

    /// Offer an event to the sink.
    ///
    /// A darkness event is silently dropped when the Sun is above the darkness threshold at its
    /// time, a daylight event when the Sun is below the daylight threshold.
    ///
    /// Errors
    /// ------
    /// * [`AlmanacError::EventBufferFull`] if the event passes the gates and the sink is full.
    pub fn push(&mut self, event: Event) -> Result<(), AlmanacError> {
        if event.flags.requires_darkness && self.sun_elevation(event.time) > self.gating.darkness {
            return Ok(());
        }
        if event.flags.requires_sunlight && self.sun_elevation(event.time) < self.gating.daylight {
            return Ok(());
        }
        if self.events.len() >= self.capacity {
            return Err(AlmanacError::EventBufferFull(self.capacity));
        }
        self.events.push(event);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Order the events and attach the calendar instant of the timed ones.
    pub fn flush(self, window: &SamplingWindow) -> Vec<Event> {
        let mut events = self.events;
        events.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
        for event in events.iter_mut().filter(|e| e.flags.timed) {
            event.epoch = Some(day_to_epoch(window.day_at(event.time)));
        }
        events
    }
}

#[cfg(test)]
mod events_test {
    use super::*;
    use crate::observers::Observer;
    use approx::assert_abs_diff_eq;

    fn sun_samples(elevations: [Degree; SAMPLE_COUNT]) -> [PositionSample; SAMPLE_COUNT] {
        elevations.map(|el| PositionSample {
            el,
            ..Default::default()
        })
    }

    fn rising_sun() -> [PositionSample; SAMPLE_COUNT] {
        // −30° at the start, +35° at the end of the window
        sun_samples(std::array::from_fn(|i| -30.0 + 5.0 * i as f64))
    }

    #[test]
    fn test_sun_elevation() {
        let sink = EventSink::new(&rising_sun(), GatingThresholds::default(), 10);
        assert_abs_diff_eq!(sink.sun_elevation(2.5), -17.5, epsilon = 1e-12);
        assert_abs_diff_eq!(sink.sun_elevation(12.9), 34.5, epsilon = 1e-12);
        assert_eq!(sink.sun_elevation(-1.5), -90.0);
        assert_eq!(sink.sun_elevation(13.0), -90.0);
        // a small negative time truncates to the first interval
        assert_abs_diff_eq!(sink.sun_elevation(-0.5), -32.5, epsilon = 1e-12);
    }

    #[test]
    fn test_darkness_gating() {
        let mut sink = EventSink::new(&rising_sun(), GatingThresholds::default(), 10);
        let dark = EventFlags::TIMED.in_darkness();
        // Sun at −25°: kept
        sink.push(Event::new("Mars rises", 1.0, dark)).unwrap();
        // Sun at −10°: dropped
        sink.push(Event::new("Mars sets", 4.0, dark)).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_sunlight_gating() {
        let mut sink = EventSink::new(&rising_sun(), GatingThresholds::default(), 10);
        let light = EventFlags::TIMED.significant().in_sunlight();
        sink.push(Event::new("Transit of Venus begins", 2.0, light)).unwrap();
        sink.push(Event::new("Transit of Venus ends", 7.0, light)).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_capacity() {
        let mut sink = EventSink::new(&rising_sun(), GatingThresholds::default(), 2);
        sink.push(Event::plain("a")).unwrap();
        sink.push(Event::plain("b")).unwrap();
        assert_eq!(
            sink.push(Event::plain("c")),
            Err(AlmanacError::EventBufferFull(2))
        );
        // a gated event never reaches the capacity check
        let dark = EventFlags::TIMED.in_darkness();
        assert_eq!(sink.push(Event::new("late", 10.0, dark)), Ok(()));
    }

    #[test]
    fn test_flush_order_and_epochs() {
        let window = SamplingWindow::new(36525.0, 1.0, 0.0, Observer::default(), false);
        let mut sink = EventSink::new(&rising_sun(), GatingThresholds::default(), 10);
        sink.push(Event::new("The sun sets", 9.0, EventFlags::TIMED)).unwrap();
        sink.push(Event::plain("Mars is in the house of Jupiter")).unwrap();
        sink.push(Event::new("Full moon", 6.0, EventFlags::TIMED)).unwrap();
        sink.push(Event::new("Perseid meteor shower", 11.0, EventFlags::SIGNIFICANT)).unwrap();

        let events = sink.flush(&window);
        let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Perseid meteor shower",
                "Mars is in the house of Jupiter",
                "Full moon",
                "The sun sets"
            ]
        );
        assert_eq!(events[0].epoch, None);
        assert_eq!(events[0].to_string(), "Perseid meteor shower");
        let full = &events[2];
        // day 36525 is noon of 2000-01-01, half a day later is midnight
        assert_eq!(full.epoch, Some(day_to_epoch(36525.5)));
        assert!(
            full.to_string().starts_with("Full moon at 2000-01-02T00:00:00"),
            "{full}"
        );
    }
}
