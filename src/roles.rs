use clap::ValueEnum;

/// Engineering role families recognized by keywords in a job's title and departments.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Backend,
    Frontend,
    Fullstack,
    Data,
    Ml,
    Devops,
    Sre,
    Mobile,
    Security,
    Qa,
    Platform,
}

impl Role {
    /// Lowercase keywords; a role matches when any of them occurs as a substring.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Role::Backend => &[
                "backend", "back end", "server", "api", "microservice", "distributed", "scala",
                "go", "golang", "java", "python", "node", "spring", "fastapi", "django",
            ],
            Role::Frontend => &[
                "frontend", "front end", "react", "vue", "angular", "next.js", "ui", "ux", "web",
            ],
            Role::Fullstack => &["full stack", "full-stack", "fullstack"],
            Role::Data => &[
                "data engineer", "etl", "spark", "kafka", "warehouse", "dbt", "hadoop", "airflow",
            ],
            Role::Ml => &[
                "machine learning", "ml", "ai", "deep learning", "llm", "nlp", "vision", "cv", "mle",
            ],
            Role::Devops => &[
                "devops", "platform", "infra", "infrastructure", "kubernetes", "k8s", "terraform",
                "ci", "cd", "argo", "spinnaker",
            ],
            Role::Sre => &["sre", "site reliability", "reliability"],
            Role::Mobile => &["ios", "android", "swift", "kotlin", "react native"],
            Role::Security => &["security", "appsec", "infosec", "iam", "threat", "vuln", "pentest"],
            Role::Qa => &["qa", "quality", "test", "testing", "sdet"],
            Role::Platform => &["platform", "core services", "foundation"],
        }
    }

    /// `text` must already be lowercased.
    pub fn matches(self, text: &str) -> bool {
        self.keywords().iter().any(|keyword| text.contains(keyword))
    }
}
