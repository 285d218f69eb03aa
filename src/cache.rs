use serde::{Deserialize, Serialize};
use tokio::fs::{read_to_string, write};
use crate::models::MonthlyResource;

/// A fetched monthly resource together with the source it came from
#[derive(Serialize, Deserialize)]
pub struct CachedResource {
    pub source: String,
    pub resource: MonthlyResource,
}

/// Writes fetched resource data to file
///
/// # Arguments
///
/// * 'cache_dir' - directory to store data in
/// * 'prefix' - prefix to identify source
/// * 'key' - location key to use as name for the file to create
/// * 'data' - data to store
pub async fn store_cache_data(cache_dir: &str, prefix: &str, key: &str, data: &CachedResource) -> Result<(), std::io::Error> {
    let path = format!("{}{}-{}.json", cache_dir, prefix, key);

    let json = serde_json::to_string(data)?;
    write(path, json).await?;

    Ok(())
}


/// Tries to read resource data from file
///
/// # Arguments
///
/// * 'cache_dir' - directory to read data from
/// * 'prefix' - prefix to identify source
/// * 'key' - location key to use as name for the file to read
pub async fn read_cache_data(cache_dir: &str, prefix: &str, key: &str) -> Result<Option<CachedResource>, std::io::Error> {
    let path = format!("{}{}-{}.json", cache_dir, prefix, key);

    if let Ok(json) = read_to_string(path).await {
        let result: CachedResource = serde_json::from_str(&json)?;
        Ok(Some(result))
    } else {
        Ok(None)
    }
}
