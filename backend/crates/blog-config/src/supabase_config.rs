use serde::Deserialize;

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_role_key: Option<String>,
}

impl SupabaseConfig {
    /// Key used for table access. The service role key wins when both are set.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.service_role_key.as_deref()).or(non_blank(self.anon_key.as_deref()))
    }

    pub fn url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    pub fn is_ready(&self) -> bool {
        self.url().is_some() && self.api_key().is_some()
    }
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field("anon_key", &self.anon_key.as_ref().map(|_| "<redacted>"))
            .field(
                "service_role_key",
                &self.service_role_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
