//! Route `tracing` events into the logger hierarchy.
//!
//! # Responsibilities
//! - Map each event's target to a component logger
//! - Translate tracing levels to severities
//! - Flatten the event's message and fields into one line
//!
//! # Design Decisions
//! - Events from this crate are skipped; the hierarchy reports its own
//!   sink failures on `tracing`, which must not loop back into it
//! - Level filtering is left to the hierarchy, not the subscriber

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::hierarchy::LoggerRegistry;
use crate::severity::Severity;

const OWN_TARGET: &str = "logweave";

/// A `tracing_subscriber` layer that logs events through a registry.
#[derive(Debug, Clone)]
pub struct HierarchyLayer {
    registry: LoggerRegistry,
}

impl HierarchyLayer {
    pub fn new(registry: LoggerRegistry) -> Self {
        Self { registry }
    }
}

fn is_own_target(target: &str) -> bool {
    target == OWN_TARGET
        || target
            .strip_prefix(OWN_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

impl<S: Subscriber> Layer<S> for HierarchyLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let severity = Severity::from(metadata.level());
        let logger = self.registry.get(metadata.target());
        if !logger.is_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        logger.log(severity, visitor.finish());
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}
