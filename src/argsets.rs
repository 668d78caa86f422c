use std::path::PathBuf;

pub struct RunArgs {
    pub directory: Option<PathBuf>,
}

pub struct DemoArgs {
    pub out_path: Option<PathBuf>,
}
