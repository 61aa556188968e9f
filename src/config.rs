//! Declarative guard configuration.
//!
//! ```
//! use proxy_method::{args, Class, ProxyConfig, Value};
//!
//! let config = ProxyConfig::from_json(r#"{
//!     "message": "Use the Interactor",
//!     "class_methods": ["create"],
//!     "instance_methods": ["save", "update"]
//! }"#)?;
//!
//! let mut record = Class::new("Record");
//! record
//!     .define_class_method("create", |_, _| Ok(Value::from("created")))
//!     .define_method("save", |_, _| Ok(Value::from("saved")))
//!     .define_method("update", |_, _| Ok(Value::from("updated")));
//! config.apply(&mut record)?;
//!
//! assert_eq!(record.call("create", args![]).unwrap_err().to_string(), "Use the Interactor");
//! # Ok::<(), proxy_method::Error>(())
//! ```

use crate::error::Result;
use crate::proxy::{ProxyOptions, DEFAULT_PREFIX, DEFAULT_PROXY_MESSAGE};
use crate::runtime::{Class, Object};
use serde::{Deserialize, Serialize};

/// Guards for both surfaces of one class, sharing a prefix and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    pub prefix: String,
    pub message: String,
    pub class_methods: Vec<String>,
    pub instance_methods: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            message: DEFAULT_PROXY_MESSAGE.to_string(),
            class_methods: Vec::new(),
            instance_methods: Vec::new(),
        }
    }
}

impl ProxyConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Install every configured guard on `class`.
    ///
    /// Either both surfaces are guarded or, on error, `class` is unchanged.
    pub fn apply(&self, class: &mut Class) -> Result<()> {
        let mut staged = class.clone();
        if !self.class_methods.is_empty() {
            staged.proxy_class_method(
                self.class_methods.clone(),
                ProxyOptions::<Class>::new()
                    .prefix(self.prefix.as_str())
                    .message(self.message.as_str()),
            )?;
        }
        if !self.instance_methods.is_empty() {
            staged.proxy_instance_method(
                self.instance_methods.clone(),
                ProxyOptions::<Object>::new()
                    .prefix(self.prefix.as_str())
                    .message(self.message.as_str()),
            )?;
        }
        *class = staged;
        Ok(())
    }
}
