use log::{LevelFilter, Record};

#[derive(Clone, Copy, Debug)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}
impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}
impl Config {
	/// Label records with their `target:` instead of the module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	#[cfg(test)]
	pub fn with_level(mut self, level: LevelFilter) -> Self {
		self.level = level;
		self
	}

	pub fn level(&self) -> LevelFilter {
		self.level
	}

	fn format(&self, record: &Record) -> String {
		let label = match (self.prefer_target, record.module_path()) {
			(false, Some(module)) => module,
			_ => record.target(),
		};
		format!("[{} {label}] {}", record.level(), record.args())
	}
}

pub mod wasm {
	pub use super::Config;
	use log::{Level, Log, Metadata, Record};
	use wasm_bindgen::JsValue;

	struct ConsoleLogger(Config);

	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata) -> bool {
			metadata.level() <= self.0.level
		}

		fn log(&self, record: &Record) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let line = JsValue::from_str(&self.0.format(record));
			match record.level() {
				Level::Error => web_sys::console::error_1(&line),
				Level::Warn => web_sys::console::warn_1(&line),
				Level::Info => web_sys::console::info_1(&line),
				Level::Debug => web_sys::console::log_1(&line),
				Level::Trace => web_sys::console::debug_1(&line),
			}
		}

		fn flush(&self) {}
	}

	/// Routes `log` records and panics to the browser console.
	pub fn init(config: Config) {
		console_error_panic_hook::set_once();
		if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
			log::set_max_level(config.level);
		}
	}
}

pub mod native {
	use simplelog::{ColorChoice, TermLogger, TerminalMode};

	pub fn init(config: super::Config) {
		let _ = TermLogger::init(
			config.level(),
			simplelog::Config::default(),
			TerminalMode::Mixed,
			ColorChoice::Auto,
		);
	}
}
