use {
    std::fs::read_to_string,
    tracing::warn,
    serde::Deserialize,
};

const DEFAULT_WORK_LINE_LIMIT: u64 = 5;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub steps: StepsConfig,
    pub infra: Option<InfraConfig>,
}

#[derive(Deserialize, Debug)]
pub struct StepsConfig {
    #[serde(default)]
    pub author_import: AuthorImportStepConfig,
    #[serde(default)]
    pub work_import: WorkImportStepConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthorImportStepConfig {
    pub enabled: bool,
    dump_path: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct WorkImportStepConfig {
    pub enabled: bool,
    dump_path: Option<String>,
    #[serde(default = "default_work_line_limit")]
    line_limit: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InfraConfig {
    #[serde(default)]
    database: DatabaseConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    connection_string: Option<String>,
    ca_cert: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: StepsConfig::default(),
            infra: None,
        }
    }
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            author_import: AuthorImportStepConfig::default(),
            work_import: WorkImportStepConfig::default(),
        }
    }
}

impl Default for AuthorImportStepConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dump_path: None,
        }
    }
}

impl Default for WorkImportStepConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dump_path: None,
            line_limit: Some(DEFAULT_WORK_LINE_LIMIT),
        }
    }
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            ca_cert: None,
        }
    }
}

fn default_work_line_limit() -> Option<u64> {
    Some(DEFAULT_WORK_LINE_LIMIT)
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| toml::from_str(&v).map_err(|err| err.to_string()))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn infra(&self) -> InfraConfig {
        self.infra.as_ref().cloned().unwrap_or_default()
    }
}

impl AuthorImportStepConfig {
    pub fn dump_path(&self) -> Option<&String> {
        self.dump_path.as_ref()
    }
}

impl WorkImportStepConfig {
    pub fn dump_path(&self) -> Option<&String> {
        self.dump_path.as_ref()
    }

    pub fn line_limit(&self) -> Option<u64> {
        self.line_limit
    }
}

impl InfraConfig {
    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }
}

impl DatabaseConfig {
    pub fn connection_string(&self) -> Option<&String> {
        self.connection_string.as_ref()
    }

    pub fn ca_cert(&self) -> Option<&String> {
        self.ca_cert.as_ref()
    }
}
