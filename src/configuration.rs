use serde_aux::field_attributes::deserialize_number_from_string;

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `local` or `production`."
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub name: String,
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PaginationSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_name")]
    pub page_name: String,
    #[serde(
        default = "default_per_page",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub default_per_page: u64,
    #[serde(
        default = "default_max_per_page",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub max_per_page: u64,
    #[serde(
        default = "default_on_each_side",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub on_each_side: u64,
    // replaces the old process-wide default view
    #[serde(default = "default_view")]
    pub default_view: String,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_name: default_page_name(),
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
            on_each_side: default_on_each_side(),
            default_view: default_view(),
        }
    }
}

fn default_base_url() -> String {
    "/".into()
}

fn default_page_name() -> String {
    crate::pagination::DEFAULT_PAGE_NAME.into()
}

const fn default_per_page() -> u64 {
    15
}

const fn default_max_per_page() -> u64 {
    100
}

const fn default_on_each_side() -> u64 {
    crate::pagination::DEFAULT_ON_EACH_SIDE
}

fn default_view() -> String {
    "pagination/tailwind.html".into()
}

#[allow(clippy::missing_errors_doc)]
/// # Panics
/// when the working directory or `APP_ENVIRONMENT` can't be read
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
