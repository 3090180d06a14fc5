use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::PathBuf,
};

use fxhash::FxHasher64;

use crate::{route_alternatives::RouteAlternatives, route_provider::RouteProvider};

pub const CACHE_FOLDER_ENV_VAR: &str = "ECOROUTE_CACHE_FOLDER";

pub trait RoutesCache {
    fn cache(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        provider: &RouteProvider,
        routes: &RouteAlternatives,
    ) -> Result<(), anyhow::Error>;

    fn get(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        provider: &RouteProvider,
    ) -> Result<Option<RouteAlternatives>, anyhow::Error>;
}

fn hash_points<H>(points: &[geo_types::Point], hasher: &mut H)
where
    H: Hasher,
{
    points.len().hash(hasher);
    for point in points {
        hasher.write_u64(point.x().to_bits());
        hasher.write_u64(point.y().to_bits());
    }
}

pub(crate) fn get_filename(
    from: geo_types::Point,
    to: geo_types::Point,
    provider: &RouteProvider,
) -> String {
    let mut hasher = FxHasher64::default();

    hash_points(&[from, to], &mut hasher);
    provider.hash(&mut hasher);

    let hash = hasher.finish();
    format!("{:016x}.json", hash)
}

/// Stores provider responses as JSON files in a folder. Without a folder
/// every lookup misses and nothing is written. Entries never expire, see
/// [`RouteProvider::is_cacheable`] for what is kept out.
#[derive(Debug, Clone, Default)]
pub struct FileCache {
    folder: Option<PathBuf>,
}

impl FileCache {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: Some(folder.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            folder: std::env::var(CACHE_FOLDER_ENV_VAR).ok().map(PathBuf::from),
        }
    }

    fn folder(&self) -> Result<Option<&PathBuf>, anyhow::Error> {
        match &self.folder {
            Some(folder) if !folder.is_dir() => Err(anyhow::anyhow!(
                "Path {} is not a directory",
                folder.display()
            )),
            folder => Ok(folder.as_ref()),
        }
    }
}

impl RoutesCache for FileCache {
    fn cache(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        provider: &RouteProvider,
        routes: &RouteAlternatives,
    ) -> Result<(), anyhow::Error> {
        let Some(folder) = self.folder()? else {
            return Ok(());
        };

        let file = std::fs::File::create(folder.join(get_filename(from, to, provider)))?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        serde_json::to_writer(&mut writer, routes)?;
        writer.flush()?;

        Ok(())
    }

    fn get(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        provider: &RouteProvider,
    ) -> Result<Option<RouteAlternatives>, anyhow::Error> {
        let Some(folder) = self.folder()? else {
            return Ok(None);
        };

        let file_path = folder.join(get_filename(from, to, provider));

        if !file_path.is_file() {
            return Ok(None);
        }

        let file = std::fs::File::open(file_path)?;
        let routes: RouteAlternatives = serde_json::from_reader(file)?;

        Ok(Some(routes))
    }
}

pub struct NoCache;

impl RoutesCache for NoCache {
    fn cache(
        &self,
        _from: geo_types::Point,
        _to: geo_types::Point,
        _provider: &RouteProvider,
        _routes: &RouteAlternatives,
    ) -> Result<(), anyhow::Error> {
        Ok(())
    }

    fn get(
        &self,
        _from: geo_types::Point,
        _to: geo_types::Point,
        _provider: &RouteProvider,
    ) -> Result<Option<RouteAlternatives>, anyhow::Error> {
        Ok(None)
    }
}
