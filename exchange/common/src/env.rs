use eyre::{Context, Result};

/// recursively search for .env file in the current directory and its parents
/// return true if found and loaded, false otherwise
pub fn load_env_recursively() -> Result<bool> {
    let path = std::env::current_dir()?;
    load_env_from(path)
}

pub fn load_env_from(mut path: std::path::PathBuf) -> Result<bool> {
    loop {
        let env_path = path.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load .env from path: {}", env_path.display()))?;
            return Ok(true);
        }
        if !path.pop() {
            break;
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_env_from_parent_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(".env"), "COMMON_ENV_TEST_KEY=found\n")?;
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested)?;

        assert!(load_env_from(nested)?);
        assert_eq!(std::env::var("COMMON_ENV_TEST_KEY")?, "found");
        Ok(())
    }
}
