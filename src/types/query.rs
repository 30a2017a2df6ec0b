/// Ordered set of query parameters for a single request.
///
/// Setting a key that is already present replaces its value in place, so the
/// iteration order is always the order in which keys were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a parameter
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Insert a parameter only when the key is not present yet
    pub fn set_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.pairs.push((key, value.into()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Optional filters for the holiday list endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolidayOptions {
    regions: Option<String>,
    holiday_type: Option<String>,
    language: Option<String>,
    timezone: Option<String>,
    extra: QueryParams,
}

impl HolidayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma-separated region or city codes (e.g. `GB-SCT`, `IT-MILAN`)
    pub fn with_regions(mut self, regions: impl Into<String>) -> Self {
        self.regions = Some(regions.into());
        self
    }

    /// Holiday type filter, sent as `type` (e.g. `public`)
    pub fn with_type(mut self, holiday_type: impl Into<String>) -> Self {
        self.holiday_type = Some(holiday_type.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Any other parameter the service accepts
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.set(key, value);
        self
    }

    pub fn regions(&self) -> Option<&str> {
        self.regions.as_deref()
    }

    pub(crate) fn set_regions(&mut self, regions: impl Into<String>) {
        self.regions = Some(regions.into());
    }

    /// Flatten into query parameters: named filters first, then extras
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();

        let named = [
            ("regions", &self.regions),
            ("type", &self.holiday_type),
            ("language", &self.language),
            ("timezone", &self.timezone),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                query.set(key, value.as_str());
            }
        }

        for (key, value) in self.extra.iter() {
            // Named filters win over a raw parameter of the same name
            query.set_if_absent(key, value);
        }

        query
    }
}
