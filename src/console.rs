use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

const FORMAT:&str = "%cfxsnake%c:\t%s";
const PREFIX_STYLE:&str = "color: red; font-weight: bold;";

/// `log` backend that writes to the browser console.
struct ConsoleLogger;

static LOGGER:ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
  fn enabled(&self, metadata:&Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record:&Record) {
    if !self.enabled(record.metadata()) {return;}
    let (format,style,reset,message) = (
      JsValue::from_str(FORMAT),
      JsValue::from_str(PREFIX_STYLE),
      JsValue::from_str(""),
      JsValue::from_str(&record.args().to_string())
    );
    match record.level() {
      Level::Error => console::error_4(&format,&style,&reset,&message),
      Level::Warn  => console::warn_4(&format,&style,&reset,&message),
      _            => console::log_4(&format,&style,&reset,&message)
    }
  }

  fn flush(&self) {}
}

/// Installs the console logger. A second call leaves the first in place.
pub fn init(level:LevelFilter) {
  if log::set_logger(&LOGGER).is_ok() {
    log::set_max_level(level);
  }
}
