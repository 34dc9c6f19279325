//! Random event generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TrafficConfig;
use crate::payload::message::{random_phone, render};
use crate::payload::types::{Encoding, LogEvent};

/// Produces randomized [`LogEvent`]s from a tenant set and a template set.
pub struct EventGenerator<R> {
    tenants: Vec<String>,
    templates: Vec<String>,
    json_ratio: f64,
    rng: R,
}

impl<R: Rng> EventGenerator<R> {
    /// Build a generator from validated traffic settings.
    ///
    /// Tenants and templates must be non-empty and `json_ratio` must lie in
    /// `[0, 1]`; config validation guarantees both.
    pub fn new(traffic: &TrafficConfig, rng: R) -> Self {
        Self {
            tenants: traffic.tenants.clone(),
            templates: traffic.templates.clone(),
            json_ratio: traffic.json_ratio.clamp(0.0, 1.0),
            rng,
        }
    }

    pub fn pick_tenant(&mut self) -> &str {
        self.tenants
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn pick_encoding(&mut self) -> Encoding {
        if self.rng.gen_bool(self.json_ratio) {
            Encoding::Json
        } else {
            Encoding::Plain
        }
    }

    /// Render a random template with a fresh phone token.
    pub fn message(&mut self) -> String {
        let phone = random_phone(&mut self.rng);
        let template = self
            .templates
            .choose(&mut self.rng)
            .map(String::as_str)
            .unwrap_or_default();
        render(template, &phone)
    }

    pub fn next_event(&mut self) -> LogEvent {
        let tenant = self.pick_tenant().to_string();
        let encoding = self.pick_encoding();
        let text = self.message();
        LogEvent::new(tenant, text, encoding)
    }
}
