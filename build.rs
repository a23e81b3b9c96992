use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use vergen::{BuildBuilder, CargoBuilder, Emitter, RustcBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_timestamp(true).build()?;

    let cargo = CargoBuilder::default()
        .opt_level(true)
        .target_triple(true)
        .build()?;

    let rustc = RustcBuilder::default()
        .semver(true)
        .channel(true)
        .build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&rustc)?
        .emit()?;

    let target_dir = target_dir()?;
    copy_configs(&target_dir)?;
    copy_assets(&target_dir)?;

    Ok(())
}

/// Resolves target/{profile} from OUT_DIR (target/{profile}/build/wizbub-xxx/out)
fn target_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let dir = Path::new(&out_dir)
        .parent()
        .and_then(|p| p.parent())
        .and_then(|p| p.parent())
        .ok_or("Could not determine target directory")?;
    Ok(dir.to_path_buf())
}

fn copy_configs(target_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let profile = env::var("PROFILE")?;
    let config_out_dir = target_dir.join("config");
    fs::create_dir_all(&config_out_dir)?;

    // Release builds only ship the release profile
    let profiles: &[&str] = if profile == "release" {
        &["release"]
    } else {
        &["debug", "release"]
    };

    for name in profiles {
        let source = PathBuf::from(format!("config/{name}.toml"));
        if source.exists() {
            fs::copy(&source, config_out_dir.join(format!("{name}.toml")))?;
            println!("cargo:rerun-if-changed={}", source.display());
        }
    }

    Ok(())
}

/// Mirrors the bundled icon set next to the binary so internal assets resolve
fn copy_assets(target_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = Path::new("assets/dawnlike/Derived");
    if !source_dir.exists() {
        return Ok(());
    }

    let out_dir = target_dir.join("assets/dawnlike/Derived");
    fs::create_dir_all(&out_dir)?;

    for entry in fs::read_dir(source_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            if let Some(name) = path.file_name() {
                fs::copy(&path, out_dir.join(name))?;
            }
        }
    }
    println!("cargo:rerun-if-changed=assets/dawnlike/Derived");

    Ok(())
}
