/// A movie suggested by the recommendation provider.
///
/// Only `title` is guaranteed. The remaining fields are descriptive extras
/// passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recommendation {
    pub title: String,
    pub year: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub reason: Option<String>,
    pub poster_url: Option<String>,
}

impl Recommendation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_poster_url(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }
}
