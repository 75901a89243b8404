//! Unit Builder - assembles raw extraction results into generation units.
//!
//! One source file becomes one [`DomainUnit`] / [`InterfaceUnit`] pair;
//! every qualifying interface in the file contributes a service body to
//! both. All naming and import decisions are made here, so the renderer
//! only ever sees fully resolved units.

use std::path::{Path, PathBuf};

use crate::domain::{
    Binding, DomainBody, DomainUnit, Import, Injector, InterfaceUnit, MethodSignature,
    RawInterface, RawMethod, ServiceDescriptor, SourceFile, TypeRef, naming,
};

/// Builds generation units for one run.
///
/// Constructed once per invocation from the run configuration; holds no
/// state between files.
#[derive(Debug, Clone)]
pub struct UnitBuilder {
    domain_label: String,
    sub_domain_label: String,
    out_dir: PathBuf,
    sub_domain_out_dir: PathBuf,
}

impl UnitBuilder {
    pub fn new(
        domain_label: impl Into<String>,
        sub_domain_label: impl Into<String>,
        out_dir: impl Into<PathBuf>,
        sub_domain_out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            domain_label: domain_label.into(),
            sub_domain_label: sub_domain_label.into(),
            out_dir: out_dir.into(),
            sub_domain_out_dir: sub_domain_out_dir.into(),
        }
    }

    /// Build the unit pair for one source file.
    ///
    /// Returns `None` when the file contained no qualifying interfaces.
    pub fn build(
        &self,
        file: &SourceFile,
        source_import: &str,
        sub_domain_import: &str,
    ) -> Option<(DomainUnit, InterfaceUnit)> {
        if file.interfaces.is_empty() {
            return None;
        }

        let base = naming::trim_file_suffixes(&file_base_name(&file.path));

        let mut domain_bodies = Vec::with_capacity(file.interfaces.len());
        let mut contract_bodies = Vec::with_capacity(file.interfaces.len());

        for interface in &file.interfaces {
            let descriptor = self.describe(interface, &file.package);
            let injector = self.injector_for(&descriptor.name);
            contract_bodies.push(descriptor.clone());
            domain_bodies.push(DomainBody {
                service: descriptor,
                injector,
            });
        }

        let domain_unit = DomainUnit {
            file_name: self.target_path(&self.out_dir, &base, &self.domain_label),
            package: naming::package_from_dir(&self.out_dir),
            label: self.domain_label.clone(),
            imports: vec![
                Import::plain("context"),
                Import::plain(source_import),
                Import::aliased(naming::shorten(&self.sub_domain_label), sub_domain_import),
            ],
            bodies: domain_bodies,
        };

        let interface_unit = InterfaceUnit {
            file_name: self.target_path(&self.sub_domain_out_dir, &base, &self.sub_domain_label),
            package: naming::package_from_dir(&self.sub_domain_out_dir),
            label: self.sub_domain_label.clone(),
            imports: vec![Import::plain("context"), Import::plain(source_import)],
            bodies: contract_bodies,
        };

        Some((domain_unit, interface_unit))
    }

    /// Strip the interface-convention suffix and resolve every method.
    fn describe(&self, interface: &RawInterface, package: &str) -> ServiceDescriptor {
        // Two passes: "WidgetServiceServer" → "WidgetService" → "Widget".
        let without_server = naming::trim_service_suffix(&interface.name);
        let name = naming::trim_service_suffix(without_server);

        ServiceDescriptor {
            name: name.to_string(),
            methods: interface
                .methods
                .iter()
                .map(|method| self.resolve_method(method, package))
                .collect(),
        }
    }

    fn injector_for(&self, service_name: &str) -> Injector {
        let name = format!("{service_name}{}", self.sub_domain_label);
        Injector {
            alias: naming::lower_first(&name),
            name,
            package: naming::shorten(&self.sub_domain_label),
        }
    }

    fn resolve_method(&self, method: &RawMethod, package: &str) -> MethodSignature {
        MethodSignature {
            name: method.name.clone(),
            args: method
                .params
                .iter()
                .filter_map(|type_ref| resolve_param(type_ref, package))
                .collect(),
            returns: method
                .results
                .iter()
                .filter_map(|type_ref| resolve_result(type_ref, package))
                .collect(),
        }
    }

    fn target_path(&self, dir: &Path, base: &str, label: &str) -> PathBuf {
        dir.join(format!("{base}_{}.go", label.to_lowercase()))
    }
}

/// Parameters keep selector and pointer shapes; everything else is dropped.
fn resolve_param(type_ref: &TypeRef, package: &str) -> Option<Binding> {
    match type_ref {
        TypeRef::Selector { package: pkg, name } => Some(Binding::new(
            naming::shorten(name),
            format!("{pkg}.{name}"),
        )),
        TypeRef::Pointer { name } => Some(Binding::new(
            naming::shorten(name),
            format!("*{package}.{name}"),
        )),
        TypeRef::Ident { .. } | TypeRef::Unsupported => None,
    }
}

/// Results keep pointer and bare-identifier shapes; everything else is dropped.
fn resolve_result(type_ref: &TypeRef, package: &str) -> Option<Binding> {
    match type_ref {
        TypeRef::Pointer { name } => Some(Binding::new(
            naming::shorten(name),
            format!("*{package}.{name}"),
        )),
        TypeRef::Ident { name } => Some(Binding::new(naming::shorten(name), name.clone())),
        TypeRef::Selector { .. } | TypeRef::Unsupported => None,
    }
}

fn file_base_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_file() -> SourceFile {
        SourceFile {
            path: PathBuf::from("/src/gen/widget_grpc.pb.go"),
            package: "widgetv1".into(),
            interfaces: vec![RawInterface {
                name: "WidgetServiceServer".into(),
                methods: vec![RawMethod {
                    name: "Create".into(),
                    params: vec![
                        TypeRef::Selector {
                            package: "context".into(),
                            name: "Context".into(),
                        },
                        TypeRef::Pointer {
                            name: "CreateRequest".into(),
                        },
                    ],
                    results: vec![
                        TypeRef::Pointer {
                            name: "CreateResponse".into(),
                        },
                        TypeRef::Ident {
                            name: "error".into(),
                        },
                    ],
                }],
            }],
        }
    }

    fn builder() -> UnitBuilder {
        UnitBuilder::new("Handler", "Service", "/out/handlers/v1", "/out/services")
    }

    #[test]
    fn widget_domain_unit_matches_convention() {
        let (domain, _) = builder()
            .build(&widget_file(), "github.com/acme/widget/gen/widgetv1", "github.com/acme/app/services")
            .unwrap();

        assert_eq!(domain.file_name, PathBuf::from("/out/handlers/v1/widget_handler.go"));
        assert_eq!(domain.package, "v1");
        assert_eq!(domain.label, "Handler");

        assert_eq!(domain.bodies.len(), 1);
        let body = &domain.bodies[0];
        assert_eq!(body.service.name, "Widget");
        assert_eq!(body.injector.name, "WidgetService");
        assert_eq!(body.injector.alias, "widgetService");
        assert_eq!(body.injector.package, "svc");

        let method = &body.service.methods[0];
        assert_eq!(method.name, "Create");
        assert_eq!(
            method.args,
            vec![
                Binding::new("ctx", "context.Context"),
                Binding::new("req", "*widgetv1.CreateRequest"),
            ]
        );
        assert_eq!(
            method.returns,
            vec![
                Binding::new("res", "*widgetv1.CreateResponse"),
                Binding::new("err", "error"),
            ]
        );
    }

    #[test]
    fn widget_interface_unit_restates_the_contract() {
        let (domain, interface) = builder()
            .build(&widget_file(), "github.com/acme/widget/gen/widgetv1", "github.com/acme/app/services")
            .unwrap();

        assert_eq!(
            interface.file_name,
            PathBuf::from("/out/services/widget_service.go")
        );
        assert_eq!(interface.package, "services");
        assert_eq!(interface.label, "Service");
        // Same method set, no injector.
        assert_eq!(interface.bodies, vec![domain.bodies[0].service.clone()]);
    }

    #[test]
    fn domain_imports_carry_context_source_and_aliased_sub_domain() {
        let (domain, interface) = builder()
            .build(&widget_file(), "github.com/acme/widget/gen/widgetv1", "github.com/acme/app/services")
            .unwrap();

        assert_eq!(
            domain.imports,
            vec![
                Import::plain("context"),
                Import::plain("github.com/acme/widget/gen/widgetv1"),
                Import::aliased("svc", "github.com/acme/app/services"),
            ]
        );
        assert_eq!(
            interface.imports,
            vec![
                Import::plain("context"),
                Import::plain("github.com/acme/widget/gen/widgetv1"),
            ]
        );
    }

    #[test]
    fn bare_ident_parameter_is_dropped() {
        assert_eq!(
            resolve_param(
                &TypeRef::Ident {
                    name: "string".into()
                },
                "widgetv1"
            ),
            None
        );
    }

    #[test]
    fn selector_result_is_dropped() {
        assert_eq!(
            resolve_result(
                &TypeRef::Selector {
                    package: "codes".into(),
                    name: "Code".into()
                },
                "widgetv1"
            ),
            None
        );
    }

    #[test]
    fn unsupported_shapes_are_dropped_without_error() {
        assert_eq!(resolve_param(&TypeRef::Unsupported, "widgetv1"), None);
        assert_eq!(resolve_result(&TypeRef::Unsupported, "widgetv1"), None);
    }

    #[test]
    fn server_only_suffix_still_derives_service_name() {
        let mut file = widget_file();
        file.interfaces[0].name = "WidgetServer".into();
        let (domain, _) = builder()
            .build(&file, "github.com/acme/widget/gen/widgetv1", "github.com/acme/app/services")
            .unwrap();
        assert_eq!(domain.bodies[0].service.name, "Widget");
    }

    #[test]
    fn file_without_interfaces_builds_nothing() {
        let file = SourceFile {
            path: PathBuf::from("/src/gen/empty_grpc.pb.go"),
            package: "widgetv1".into(),
            interfaces: vec![],
        };
        assert!(builder().build(&file, "a", "b").is_none());
    }

    #[test]
    fn two_interfaces_accumulate_into_one_unit_pair() {
        let mut file = widget_file();
        file.interfaces.push(RawInterface {
            name: "GadgetServiceServer".into(),
            methods: vec![],
        });

        let (domain, interface) = builder()
            .build(&file, "github.com/acme/widget/gen/widgetv1", "github.com/acme/app/services")
            .unwrap();

        assert_eq!(domain.bodies.len(), 2);
        assert_eq!(interface.bodies.len(), 2);
        assert_eq!(domain.bodies[1].service.name, "Gadget");
        assert_eq!(domain.bodies[1].injector.alias, "gadgetService");
    }

    #[test]
    fn labels_flow_into_paths_and_injectors() {
        let builder = UnitBuilder::new("Controller", "Usecase", "/out/api", "/out/usecases");
        let (domain, interface) = builder
            .build(&widget_file(), "src", "sub")
            .unwrap();

        assert_eq!(domain.file_name, PathBuf::from("/out/api/widget_controller.go"));
        assert_eq!(
            interface.file_name,
            PathBuf::from("/out/usecases/widget_usecase.go")
        );
        assert_eq!(domain.bodies[0].injector.name, "WidgetUsecase");
        // "usecase" has no synonym entry; the lower-cased word is the alias.
        assert_eq!(domain.bodies[0].injector.package, "usecase");
    }
}
