//! A failed assertion is reported at the line of the test that made it.

use contextspec_assertions::prelude::*;
use std::fmt;
use std::panic;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Collects the `location` field of every event it sees.
#[derive(Clone, Default)]
struct CaptureLocations(Arc<Mutex<Vec<String>>>);

struct LocationVisitor<'a>(&'a mut Option<String>);

impl Visit for LocationVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "location" {
            *self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLocations {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut location = None;
        event.record(&mut LocationVisitor(&mut location));
        if let Some(location) = location {
            self.0.lock().unwrap().push(location);
        }
    }
}

/// Runs `action` under a capturing subscriber and returns the logged failure
/// locations.
fn failure_locations(action: impl FnOnce() + panic::UnwindSafe) -> Vec<String> {
    let capture = CaptureLocations::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let outcome = tracing::subscriber::with_default(subscriber, || panic::catch_unwind(action));
    assert!(outcome.is_err(), "the assertion should have failed");

    let locations = capture.0.lock().unwrap().clone();
    locations
}

#[test]
fn fluent_failure_points_at_the_calling_line() {
    let line = line!() + 1;
    let locations = failure_locations(|| 1_i32.should_equal(&2));

    assert_eq!(locations.len(), 1);
    assert!(
        locations[0].starts_with(&format!("{}:{}:", file!(), line)),
        "logged location {} is not this test",
        locations[0]
    );
}

#[test]
fn blanket_trait_failure_points_at_the_calling_line() {
    let line = line!() + 1;
    let locations = failure_locations(|| vec!["a", "b"].should_contain(&"z"));

    assert_eq!(locations.len(), 1);
    assert!(locations[0].starts_with(&format!("{}:{}:", file!(), line)));
}

#[test]
fn error_expectation_failure_points_at_the_calling_line() {
    let line = line!() + 1;
    let locations = failure_locations(|| should_fail(|| "7".parse::<u8>()));

    assert_eq!(locations.len(), 1);
    assert!(locations[0].starts_with(&format!("{}:{}:", file!(), line)));
    assert!(!locations[0].contains("src/"));
}
