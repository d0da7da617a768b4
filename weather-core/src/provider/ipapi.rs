use crate::{error::ResolveError, fetch::JsonSource, model::Location};

use super::extract;

/// Ask the geolocation endpoint where the caller is. The provider infers
/// the position from the connection, so no parameters are sent.
pub async fn resolve_location(
    source: &dyn JsonSource,
    url: &str,
) -> Result<Location, ResolveError> {
    let body = source.get_json(url).await?;
    let location: Location = extract("location", &body)?;

    tracing::info!(
        city = %location.city,
        lat = location.latitude,
        lon = location.longitude,
        "location resolved"
    );
    Ok(location)
}
