use super::color_scheme::ColorScheme;

/// Narrow "apply global style" interface.
///
/// The application shell owns the global style state (the document root's
/// class list, a window theme, ...) and hands the theme provider a sink
/// through which it is the only writer.
///
/// `apply` runs while the provider serializes writes: it may read the theme
/// through a handle, but setting it from inside `apply` deadlocks.
pub trait StyleMarkerSink: Send + Sync {
    fn apply(&self, scheme: ColorScheme);
}

/// Sink that discards all updates.
///
/// Used by hosts without global styling and by tests where the marker is
/// irrelevant.
pub struct NullStyleMarker;

impl StyleMarkerSink for NullStyleMarker {
    fn apply(&self, _scheme: ColorScheme) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_marker_is_noop() {
        let marker = NullStyleMarker;
        marker.apply(ColorScheme::Dark);
        marker.apply(ColorScheme::Light);
        // No panics = success
    }
}
