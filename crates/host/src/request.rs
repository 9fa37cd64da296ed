use history_core::{IdentityArguments, NavigationalRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{HostError, Result};

fn default_format() -> String {
    "html".to_string()
}

/// A routed controller action: the target of a redirect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub package_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpackage_key: Option<String>,
    pub controller_name: String,
    pub action_name: String,
    #[serde(default)]
    pub arguments: IdentityArguments,
    #[serde(default = "default_format")]
    pub format: String,
}

impl ActionRequest {
    pub fn new<P, C, A>(package_key: P, controller_name: C, action_name: A) -> Self
    where
        P: Into<String>,
        C: Into<String>,
        A: Into<String>,
    {
        Self {
            package_key: package_key.into(),
            subpackage_key: None,
            controller_name: controller_name.into(),
            action_name: action_name.into(),
            arguments: IdentityArguments::new(),
            format: default_format(),
        }
    }

    pub fn with_argument<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Parses `Package:Controller->action`. The package falls back to
    /// `default_package` when omitted.
    pub fn parse_target(target: &str, default_package: &str) -> Result<Self> {
        let target = target.trim();
        let invalid = || HostError::InvalidTarget(target.to_string());
        let (left, action) = target.split_once("->").ok_or_else(invalid)?;
        let (package, controller) = left.split_once(':').unwrap_or((default_package, left));
        if package.is_empty() || controller.is_empty() || action.is_empty() {
            return Err(invalid());
        }
        let reserved = |s: &&str| s.contains(['*', ':', ' ']) || s.contains("->");
        if [package, controller, action].iter().any(reserved) {
            return Err(invalid());
        }
        Ok(Self::new(package, controller, action))
    }

    /// Renders the default route `{package}/{subpackage}/{controller}/{action}`
    /// below `base`. Scalars become query pairs, identity references are
    /// written as `name[__identity]=...`.
    pub fn to_uri(&self, base: &Url) -> Result<Url> {
        let mut path = String::new();
        let segments = [
            Some(self.package_key.as_str()),
            self.subpackage_key.as_deref(),
            Some(self.controller_name.as_str()),
            Some(self.action_name.as_str()),
        ];
        for s in segments.into_iter().flatten() {
            path.push_str(&s.replace('.', "-").to_lowercase());
            path.push('/');
        }
        path.pop();
        if self.format != "html" {
            path.push('.');
            path.push_str(&self.format);
        }
        let mut url = base.join(&path)?;
        if !self.arguments.is_empty() {
            let mut q = url.query_pairs_mut();
            for (name, value) in &self.arguments {
                append_query(&mut q, name, value);
            }
        }
        Ok(url)
    }
}

fn append_query(
    q: &mut url::form_urlencoded::Serializer<'_, url::UrlQuery<'_>>,
    name: &str,
    value: &Value,
) {
    match value {
        Value::Null => {}
        Value::String(s) => {
            q.append_pair(name, s);
        }
        Value::Bool(b) => {
            q.append_pair(name, if *b { "1" } else { "0" });
        }
        Value::Number(n) => {
            q.append_pair(name, &n.to_string());
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                append_query(q, &format!("{name}[{i}]"), item);
            }
        }
        Value::Object(map) => {
            for (k, v) in map {
                append_query(q, &format!("{name}[{k}]"), v);
            }
        }
    }
}

impl NavigationalRequest for ActionRequest {
    fn package_key(&self) -> &str {
        &self.package_key
    }

    fn subpackage_key(&self) -> Option<&str> {
        self.subpackage_key.as_deref()
    }

    fn controller_name(&self) -> &str {
        &self.controller_name
    }

    fn action_name(&self) -> &str {
        &self.action_name
    }

    fn arguments(&self) -> &IdentityArguments {
        &self.arguments
    }

    fn set_package_key(&mut self, package_key: String) {
        self.package_key = package_key;
    }

    fn set_subpackage_key(&mut self, subpackage_key: Option<String>) {
        self.subpackage_key = subpackage_key;
    }

    fn set_controller_name(&mut self, controller_name: String) {
        self.controller_name = controller_name;
    }

    fn set_action_name(&mut self, action_name: String) {
        self.action_name = action_name;
    }

    fn set_arguments(&mut self, arguments: IdentityArguments) {
        self.arguments = arguments;
    }
}
