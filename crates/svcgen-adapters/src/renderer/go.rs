//! Tera-backed unit renderer for Go output.

use std::path::Path;

use tera::Tera;
use tracing::instrument;

use svcgen_core::{
    application::{ApplicationError, ports::UnitRenderer},
    domain::{DomainUnit, InterfaceUnit},
    error::SvcgenResult,
};

use super::format;

/// Template assets, embedded at compile time.
const DOMAIN_TEMPLATE: &str = include_str!("../../templates/domain.go.tera");
const INTERFACE_TEMPLATE: &str = include_str!("../../templates/interface.go.tera");

/// Renders generation units through the embedded templates and the
/// canonical formatting pass.
pub struct GoUnitRenderer {
    tera: Tera,
}

impl GoUnitRenderer {
    /// Create a renderer with both templates registered.
    pub fn new() -> SvcgenResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("domain", DOMAIN_TEMPLATE)
            .map_err(|e| template_error("domain", e))?;
        tera.add_raw_template("interface", INTERFACE_TEMPLATE)
            .map_err(|e| template_error("interface", e))?;
        Ok(Self { tera })
    }

    fn render(
        &self,
        template: &str,
        unit: &impl serde::Serialize,
        file_name: &Path,
    ) -> SvcgenResult<String> {
        let unit_name = file_name.display().to_string();

        let context = tera::Context::from_serialize(unit).map_err(|e| {
            ApplicationError::RenderingFailed {
                unit: unit_name.clone(),
                reason: e.to_string(),
            }
        })?;

        let rendered =
            self.tera
                .render(template, &context)
                .map_err(|e| ApplicationError::RenderingFailed {
                    unit: unit_name.clone(),
                    reason: e.to_string(),
                })?;

        format::canonicalize(&rendered).map_err(|reason| {
            ApplicationError::FormatFailed {
                unit: unit_name,
                reason,
            }
            .into()
        })
    }
}

impl UnitRenderer for GoUnitRenderer {
    #[instrument(skip_all, fields(unit = %unit.file_name.display()))]
    fn render_domain(&self, unit: &DomainUnit) -> SvcgenResult<String> {
        self.render("domain", unit, &unit.file_name)
    }

    #[instrument(skip_all, fields(unit = %unit.file_name.display()))]
    fn render_interface(&self, unit: &InterfaceUnit) -> SvcgenResult<String> {
        self.render("interface", unit, &unit.file_name)
    }
}

fn template_error(name: &str, e: tera::Error) -> svcgen_core::error::SvcgenError {
    ApplicationError::RenderingFailed {
        unit: format!("{name} template"),
        reason: e.to_string(),
    }
    .into()
}
