//! Authorization / transport compatibility inspector
//!
//! Warns when the request's effective auth scheme cannot be performed by the
//! active transport. Today that means Digest auth on a browser-default
//! platform without the agent transport selected.

use std::rc::Rc;

use crate::error::Result;
use crate::i18n::Translator;
use crate::inspection::{
    DocLink, INSPECTIONS_DOC_LINK, InspectionLocation, InspectionRegistry, InspectionResult,
    Inspector, Severity,
};
use crate::models::{AuthConfig, AuthType, Request, RequestDocument};
use crate::reactive::{Computed, Signal};
use crate::tabs::TabService;
use crate::transport::TransportService;

/// Effective auth type of a request, following `inherit` up the hierarchy.
///
/// Precedence: an explicit type wins; example responses have no live
/// hierarchy; a document without an inherited snapshot cannot resolve;
/// otherwise the nearest ancestor's type is used (which may be `none`).
/// Returns `None` when nothing could be resolved.
pub fn resolve_auth_type(auth: &AuthConfig, document: &RequestDocument) -> Option<AuthType> {
    if !auth.auth_type.is_inherit() {
        return Some(auth.auth_type);
    }

    if document.is_example_response() {
        return None;
    }

    let inherited = document.inherited_properties.as_ref()?;

    Some(inherited.inherited_auth_type())
}

/// Registers itself with the [`InspectionRegistry`] on construction.
pub struct AuthorizationInspector {
    tabs: Rc<TabService>,
    transport: Rc<TransportService>,
    i18n: Rc<Translator>,
}

impl AuthorizationInspector {
    pub const ID: &'static str = "authorization";

    pub fn init(
        registry: &InspectionRegistry,
        tabs: Rc<TabService>,
        transport: Rc<TransportService>,
        i18n: Rc<Translator>,
    ) -> Result<Rc<Self>> {
        let inspector = Rc::new(Self {
            tabs,
            transport,
            i18n,
        });
        registry.register(inspector.clone())?;
        Ok(inspector)
    }

    /// [`resolve_auth_type`] against the active tab's document.
    pub fn resolve_auth_type(&self, auth: &AuthConfig) -> Option<AuthType> {
        self.tabs
            .current_document()
            .with(|document| resolve_auth_type(auth, document))
    }
}

impl Inspector for AuthorizationInspector {
    fn inspector_id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Auth schemes the active transport cannot perform"
    }

    /// Preconditions: the request carries an `auth` block and the active tab
    /// holds a well-formed document. Both are owned upstream.
    fn get_inspections(&self, request: &Signal<Request>) -> Computed<Vec<InspectionResult>> {
        let deps = vec![
            self.transport.current().as_dependency(),
            request.as_dependency(),
            self.tabs.current_document().as_dependency(),
        ];

        let request = request.clone();
        let tabs = Rc::clone(&self.tabs);
        let transport = Rc::clone(&self.transport);
        let i18n = Rc::clone(&self.i18n);

        Computed::new(deps, move || {
            let Some(current_id) = transport.current_id() else {
                return Vec::new();
            };

            // Agent transport is required for Digest on browser-default platforms.
            let is_unsupported_transport = transport.is_unsupported_for_digest(&current_id);

            let resolved = request.with(|req| {
                tabs.current_document()
                    .with(|document| resolve_auth_type(&req.auth, document))
            });

            let mut results = Vec::new();

            if resolved == Some(AuthType::Digest) && is_unsupported_transport {
                results.push(InspectionResult {
                    id: "url".to_string(),
                    text: i18n.t("authorization.digest.inspector_warning"),
                    severity: Severity::Warning,
                    is_applicable: true,
                    locations: InspectionLocation::Url,
                    doc: Some(DocLink {
                        text: i18n.t("action.learn_more"),
                        link: INSPECTIONS_DOC_LINK.to_string(),
                    }),
                });
            }

            results
        })
    }
}
