/// Query parameters for the reverse geocode endpoint
///
/// Kept as raw strings: whatever the caller sends is what the geocoder sees.
#[derive(Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReverseGeocodeQuery {
    /// Latitude, forwarded verbatim
    pub lat: Option<String>,
    /// Longitude, forwarded verbatim
    pub lon: Option<String>,
}

impl ReverseGeocodeQuery {
    /// Pick `lat`/`lon` out of raw query pairs, first occurrence of each
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        ReverseGeocodeQuery {
            lat: first("lat"),
            lon: first("lon"),
        }
    }
}
