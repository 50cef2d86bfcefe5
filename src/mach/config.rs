/// ## Interpreter configuration
///
/// `entry` is the line execution starts on. The original interpreter
/// began one line below its own loop guard and therefore never ran a
/// single instruction; `legacy_entry` reproduces that start for
/// compatibility checks and overrides `entry`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vars: usize,
    pub cvars: usize,
    pub entry: i64,
    pub legacy_entry: bool,
    pub lenient: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            vars: 256,
            cvars: 32768,
            entry: 1,
            legacy_entry: false,
            lenient: false,
        }
    }
}

impl Config {
    pub fn start_line(&self) -> i64 {
        if self.legacy_entry {
            0
        } else {
            self.entry
        }
    }
}
