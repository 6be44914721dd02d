use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "quarry.toml";
pub const CONFIG_ENV: &str = "QUARRY_CONFIG";

/// Locates the config file. `None` means run on built-in defaults.
pub fn resolve_config_path(cli: Option<&str>) -> Option<PathBuf> {
    resolve_with(cli, std::env::var(CONFIG_ENV).ok())
}

fn resolve_with(cli: Option<&str>, env: Option<String>) -> Option<PathBuf> {
    // Precedence: CLI flag -> QUARRY_CONFIG env -> search upward from CWD and exe dir.
    // Explicit paths are returned even if missing so the read error surfaces.
    if let Some(p) = cli {
        return Some(PathBuf::from(p));
    }
    if let Some(p) = env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.iter().find_map(|base| search_upward(base, 5))
}

fn search_upward(base: &Path, max_parents: usize) -> Option<PathBuf> {
    let mut cur = Some(base);
    for _ in 0..=max_parents {
        let dir = cur?;
        let check = dir.join(CONFIG_FILE);
        if check.is_file() {
            return Some(check);
        }
        cur = dir.parent();
    }
    None
}
