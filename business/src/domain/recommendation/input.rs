/// Holds the raw text the user typed into the movie form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputCollector {
    value: String,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the current text verbatim, whitespace included.
    pub fn update(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
