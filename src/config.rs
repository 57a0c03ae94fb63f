use std::path::PathBuf;

#[derive(serde::Deserialize)]
pub(crate) struct Config {
    pub telegram: tgdigest_client::Config,
    pub openrouter: tgdigest_ai::Config,

    #[serde(default)]
    pub default_chat_id: Option<String>,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_message_limit")]
    pub message_limit: usize,
    #[serde(default = "default_prompt_dir")]
    pub prompt_dir: PathBuf,
}

fn default_model() -> String {
    "openai/o4-mini-high".to_string()
}

fn default_message_limit() -> usize {
    200
}

fn default_prompt_dir() -> PathBuf {
    PathBuf::from("data/prompts")
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let env_config = config::Environment::default()
            .separator("__")
            .list_separator(";")
            .try_parsing(true);

        let mut conf_builder = config::Config::builder().add_source(env_config);

        if std::path::Path::new("Settings.toml").exists() {
            conf_builder = conf_builder.add_source(config::File::with_name("./Settings.toml"));
        }

        conf_builder
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap_or_else(|e| panic!("Error parsing config: {e}"))
    }
}
