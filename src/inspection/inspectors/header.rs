//! Header inspector: `Cookie` headers the active transport will not send

use std::rc::Rc;

use crate::error::Result;
use crate::i18n::Translator;
use crate::inspection::{
    DocLink, INSPECTIONS_DOC_LINK, InspectionLocation, InspectionRegistry, InspectionResult,
    Inspector, RowPosition, Severity,
};
use crate::models::Request;
use crate::reactive::{Computed, Signal};
use crate::transport::TransportService;

pub struct HeaderInspector {
    transport: Rc<TransportService>,
    i18n: Rc<Translator>,
}

impl HeaderInspector {
    pub const ID: &'static str = "header";

    pub fn init(
        registry: &InspectionRegistry,
        transport: Rc<TransportService>,
        i18n: Rc<Translator>,
    ) -> Result<Rc<Self>> {
        let inspector = Rc::new(Self { transport, i18n });
        registry.register(inspector.clone())?;
        Ok(inspector)
    }
}

impl Inspector for HeaderInspector {
    fn inspector_id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Cookie headers dropped by the active transport"
    }

    fn get_inspections(&self, request: &Signal<Request>) -> Computed<Vec<InspectionResult>> {
        let deps = vec![
            self.transport.current().as_dependency(),
            request.as_dependency(),
        ];

        let request = request.clone();
        let transport = Rc::clone(&self.transport);
        let i18n = Rc::clone(&self.i18n);

        Computed::new(deps, move || {
            let Some(current_id) = transport.current_id() else {
                return Vec::new();
            };

            if transport.supports_cookies(&current_id) {
                return Vec::new();
            }

            request.with(|req| {
                req.active_headers()
                    .filter(|(_, header)| header.key.trim().eq_ignore_ascii_case("cookie"))
                    .map(|(index, header)| InspectionResult {
                        id: format!("header-{}", index),
                        text: i18n.t("inspections.header.cookie"),
                        severity: Severity::Warning,
                        is_applicable: true,
                        locations: InspectionLocation::Header {
                            position: RowPosition::Key,
                            key: Some(header.key.clone()),
                            index: Some(index),
                        },
                        doc: Some(DocLink {
                            text: i18n.t("action.learn_more"),
                            link: INSPECTIONS_DOC_LINK.to_string(),
                        }),
                    })
                    .collect()
            })
        })
    }
}
