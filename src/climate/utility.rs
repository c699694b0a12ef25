/// Rounds to one decimal place. `None` stays `None`.
///
/// Rounds the exact binary value with ties to even, so `70.25` gives `70.2`
/// and `72.35` (stored as `72.3499…`) gives `72.3`.
pub fn round_tenths(value: Option<f64>) -> Option<f64> {
    value.and_then(|v| format!("{v:.1}").parse().ok())
}
