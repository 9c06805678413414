// - If it doesn't make sense to plumb Timer into a call (like work done in parallel), return
//   Warn<T>.
// - The caller decides what the warnings mean, using has_warnings() or unpack().
#[derive(Debug)]
pub struct Warn<T> {
    value: T,
    warnings: Vec<String>,
}

impl<T> Warn<T> {
    pub fn ok(value: T) -> Warn<T> {
        Warn {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn warn(value: T, warning: String) -> Warn<T> {
        Warn {
            value,
            warnings: vec![warning],
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn unpack(self) -> (T, Vec<String>) {
        (self.value, self.warnings)
    }
}
