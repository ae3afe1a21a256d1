use std::collections::HashMap;

use strum_macros::Display;

use crate::template::{resolve, RouteParams};

/// HTTP verbs the request client can issue.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Verb {
    pub(crate) fn as_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
            Verb::Head => reqwest::Method::HEAD,
            Verb::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// One dispatchable operation: a verb, the name callers invoke it by and the
/// URL template its parameters are substituted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub verb: Verb,
    pub name: &'static str,
    pub template: &'static str,
}

const fn route(verb: Verb, name: &'static str, template: &'static str) -> RouteDescriptor {
    RouteDescriptor { verb, name, template }
}

/// Operations that are nothing more than a verb and a template. Names follow
/// the service's established client vocabulary.
///
/// The full operation inventory is published by the service itself at
/// `<origin>/ems/services/application.wadl`.
pub const ROUTE_TABLE: &[RouteDescriptor] = &[
    route(Verb::Get, "getCompany", "/company"),
    route(Verb::Get, "getCompanyList", "/company/list"),
    route(Verb::Get, "getNodePath", "/facilities/nodepath/{nodeType}/{nodeId}"),
    // floorId may be omitted to fetch every floor plan
    route(Verb::Get, "getFloorPlan", "/floor/{floorId}"),
    route(Verb::Get, "getCampusList", "/campus/list/{companyId}"),
    route(Verb::Get, "getBuildingList", "/building/list/{campusId}"),
    // buildingId may be omitted to list floors across all buildings
    route(Verb::Get, "getFloorList", "/floor/list/{buildingId}"),
    route(Verb::Get, "getAreaList", "/area/list/{floorId}"),
    route(Verb::Post, "deleteFloor", "/floor/delete/{floorId}"),
    route(Verb::Post, "deleteCampus", "/campus/delete/{campusId}"),
    route(Verb::Post, "deleteArea", "/area/delete/{areaId}"),
    route(Verb::Post, "deleteBuilding", "/building/delete/{buildingId}"),
    route(
        Verb::Post,
        "setFloorPlan",
        "/floor/setimage/{companyName}/{campusName}/{buildingName}/{floorName}/{imageUrl}",
    ),
];

/// Bindings applied after [`ROUTE_TABLE`]; on a name collision the entry here
/// wins, so a hand-tuned binding can shadow a table entry.
pub const HANDWRITTEN_ROUTES: &[RouteDescriptor] = &[
    route(
        Verb::Post,
        "setFloorPlan",
        "/floor/setimage/{companyName}/{campusName}/{buildingName}/{floorName}/{imageUrl}",
    ),
    // areaId may be omitted for the unscoped area view
    route(Verb::Get, "getFloorPlanFromArea", "/area/{areaId}"),
    route(Verb::Post, "assignFixtures", "/area/{areaId}/assignfixtures"),
];

/// A route after compilation, ready to resolve paths for dispatch.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoundRoute {
    pub(crate) verb: Verb,
    pub(crate) template: &'static str,
}

impl BoundRoute {
    pub(crate) fn resolve_path(&self, params: &RouteParams) -> String {
        resolve(self.template, params)
    }
}

/// Compiles the descriptor tables into the name-keyed dispatch map used by
/// [`EnlightedApi::invoke`](crate::EnlightedApi::invoke).
pub(crate) fn compile() -> HashMap<&'static str, BoundRoute> {
    compile_tables(&[ROUTE_TABLE, HANDWRITTEN_ROUTES])
}

/// Later tables override earlier ones entry by entry.
fn compile_tables(tables: &[&[RouteDescriptor]]) -> HashMap<&'static str, BoundRoute> {
    let mut bound = HashMap::new();
    for table in tables {
        for descriptor in *table {
            bound.insert(
                descriptor.name,
                BoundRoute {
                    verb: descriptor.verb,
                    template: descriptor.template,
                },
            );
        }
    }
    bound
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn verbs_render_uppercase() {
        assert_eq!(Verb::Get.to_string(), "GET");
        assert_eq!(Verb::Delete.to_string(), "DELETE");
        assert_eq!(Verb::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn tables_hold_no_internal_duplicates() {
        for table in [ROUTE_TABLE, HANDWRITTEN_ROUTES] {
            let names: HashSet<_> = table.iter().map(|d| d.name).collect();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn compile_binds_every_operation_once() {
        let routes = compile();
        assert_eq!(routes.len(), 15);
        for descriptor in ROUTE_TABLE.iter().chain(HANDWRITTEN_ROUTES) {
            assert!(routes.contains_key(descriptor.name), "{} missing", descriptor.name);
        }
    }

    #[test]
    fn later_tables_win_on_name_collisions() {
        let first = [route(Verb::Get, "op", "/from/table")];
        let second = [route(Verb::Post, "op", "/from/override")];
        let routes = compile_tables(&[&first, &second]);
        let bound = routes.get("op").unwrap();
        assert_eq!(bound.verb, Verb::Post);
        assert_eq!(bound.template, "/from/override");
    }

    #[test]
    fn delete_operations_ride_on_post() {
        let routes = compile();
        for name in ["deleteFloor", "deleteCampus", "deleteArea", "deleteBuilding"] {
            assert_eq!(routes.get(name).unwrap().verb, Verb::Post, "{name}");
        }
        assert_eq!(routes.get("getCompany").unwrap().verb, Verb::Get);
    }

    #[test]
    fn bound_routes_resolve_their_parameters() {
        let routes = compile();
        let params = RouteParams::new().set("areaId", 42);
        assert_eq!(
            routes.get("assignFixtures").unwrap().resolve_path(&params),
            "/area/42/assignfixtures"
        );
    }
}
