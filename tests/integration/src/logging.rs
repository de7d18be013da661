//! Log capture for asserting on `tracing` output

use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// A tracing layer that captures log messages to a Vec<String>
///
/// Each entry is formatted as `[LEVEL] message`.
#[derive(Clone, Default)]
pub struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
	/// Installs the capture as the thread's default subscriber
	///
	/// Logging stays captured until the returned guard is dropped.
	pub fn install() -> (Self, DefaultGuard) {
		let capture = Self::default();
		let guard = tracing_subscriber::registry()
			.with(capture.clone())
			.set_default();
		(capture, guard)
	}

	/// Returns every captured line
	pub fn lines(&self) -> Vec<String> {
		self.logs.lock().unwrap().clone()
	}

	/// Returns the lines logged at WARN level
	pub fn warnings(&self) -> Vec<String> {
		self.lines()
			.into_iter()
			.filter(|line| line.starts_with("[WARN]"))
			.collect()
	}
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		let mut logs = self.logs.lock().unwrap();
		logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}
