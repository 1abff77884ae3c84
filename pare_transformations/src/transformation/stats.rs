use serde::Serialize;

/// The counters and size metrics produced alongside the reduced text.
/// Sizes are byte lengths of the markup before and after reduction.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ReduceStats {
    /// Bytes of raw markup before reduction.
    pub original_size: usize,
    /// Bytes of output after reduction.
    pub cleaned_size: usize,
    /// Script blocks removed.
    pub script_tags: usize,
    /// Style blocks removed.
    pub style_tags: usize,
    /// HTML comments removed.
    pub comments: usize,
    /// Iframe blocks removed.
    pub iframe_tags: usize,
    /// Noscript blocks removed.
    pub noscript_tags: usize,
    /// Self-contained meta tags removed.
    pub meta_tags: usize,
    /// Self-contained link tags removed.
    pub link_tags: usize,
    /// Blank-line runs collapsed.
    pub empty_lines: usize,
    /// Inline event-handler attributes removed.
    pub js_events: usize,
    /// data-* attributes removed.
    pub data_attrs: usize,
    /// Byte delta from stripping the remaining tags. Strip-all mode only.
    pub removed_tags: usize,
    /// Percent reduction from original to cleaned, rounded to two decimals.
    pub reduction_percentage: f64,
}

impl ReduceStats {
    /// Seed a stats record for raw markup of the given byte size.
    pub fn new(original_size: usize) -> Self {
        Self {
            original_size,
            ..Default::default()
        }
    }

    /// Finalize the size accounting against the reduced output. The
    /// percentage is guarded against a zero original size and can be
    /// negative when entity decoding grew the text.
    pub fn finalize(&mut self, cleaned_size: usize) {
        self.cleaned_size = cleaned_size;
        self.reduction_percentage = if self.original_size > 0 {
            let percent = (self.original_size as f64 - cleaned_size as f64)
                / self.original_size as f64
                * 100.0;

            (percent * 100.0).round() / 100.0
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::ReduceStats;

    #[test]
    fn finalize_rounds_to_two_decimals() {
        let mut stats = ReduceStats::new(3);
        stats.finalize(1);

        assert_eq!(stats.cleaned_size, 1);
        assert_eq!(stats.reduction_percentage, 66.67);
    }

    #[test]
    fn finalize_guards_zero_original_size() {
        let mut stats = ReduceStats::new(0);
        stats.finalize(0);

        assert_eq!(stats.reduction_percentage, 0.0);
    }

    #[test]
    fn finalize_allows_growth() {
        let mut stats = ReduceStats::new(4);
        stats.finalize(6);

        assert_eq!(stats.reduction_percentage, -50.0);
    }
}
