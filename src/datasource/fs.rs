use crate::config::loader::Config;

pub async fn init_fs(config: &Config) -> std::io::Result<()> {
    match tokio::fs::create_dir(&config.data_path).await {
        Ok(_) => tracing::info!("created data directory {}", config.data_path),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::warn!("data directory {} exists - using it", config.data_path)
        }
        Err(e) => return Err(e),
    };

    if let Some(root) = config.local_root() {
        tokio::fs::create_dir_all(&root).await?;
        tracing::info!("storing blobs under {}", root.display());
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_init_fs() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("data");
        let config = Config {
            data_path: data_path.to_str().unwrap().to_string(),
            ..Config::default()
        };

        init_fs(&config).await.unwrap();
        assert!(data_path.join("blobs").is_dir());

        // second run reuses the existing directory
        assert!(init_fs(&config).await.is_ok());
    }
}
