use std::path::PathBuf;

pub struct ConfigFileArgs {
    pub path: PathBuf,
}
