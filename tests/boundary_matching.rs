use cgns_mesh::loader::CgnsLoader;
use cgns_mesh::model::CgnsModel;
use cgns_mesh::tree::{CgnsNode, Payload};

fn coordinates() -> CgnsNode {
    CgnsNode::new("GridCoordinates", "GridCoordinates_t")
        .with_child(
            CgnsNode::new("CoordinateX", "DataArray_t")
                .with_payload(Payload::F64(vec![0.0, 1.0, 0.0, 0.0])),
        )
        .with_child(
            CgnsNode::new("CoordinateY", "DataArray_t")
                .with_payload(Payload::F64(vec![0.0, 0.0, 1.0, 0.0])),
        )
        .with_child(
            CgnsNode::new("CoordinateZ", "DataArray_t")
                .with_payload(Payload::F64(vec![0.0, 0.0, 0.0, 1.0])),
        )
}

fn volume_section(name: &str) -> CgnsNode {
    CgnsNode::new(name, "Elements_t")
        .with_payload(Payload::I64(vec![10, 0]))
        .with_child(
            CgnsNode::new("ElementConnectivity", "DataArray_t")
                .with_payload(Payload::I64(vec![1, 2, 3, 4])),
        )
}

fn surface_section(name: &str) -> CgnsNode {
    CgnsNode::new(name, "Elements_t")
        .with_payload(Payload::I64(vec![5, 0]))
        .with_child(
            CgnsNode::new("ElementConnectivity", "DataArray_t")
                .with_payload(Payload::I64(vec![1, 2, 3])),
        )
}

fn bc(name: &str) -> CgnsNode {
    CgnsNode::new(name, "BC_t")
}

fn bc_with_family(name: &str, family: &str) -> CgnsNode {
    bc(name).with_child(
        CgnsNode::new("FamilyName", "FamilyName_t")
            .with_payload(Payload::Bytes(family.as_bytes().to_vec())),
    )
}

fn family(raw_name: &str, display: &str) -> CgnsNode {
    CgnsNode::new(raw_name, "Family_t").with_child(
        CgnsNode::new("FamilyName", "FamilyName_t")
            .with_payload(Payload::Bytes(display.as_bytes().to_vec())),
    )
}

fn load(base: CgnsNode) -> CgnsModel {
    let root = CgnsNode::new("CGNSTree", "CGNSTree_t").with_child(base);
    CgnsLoader::default().read_model(&root).expect("load")
}

#[test]
fn family_reference_resolves_through_registry() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(volume_section("Solid"))
        .with_child(surface_section("Inlet"))
        .with_child(
            CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(bc_with_family("Inlet", "FamInlet")),
        );
    let base = CgnsNode::new("Base", "CGNSBase_t")
        .with_child(family("FamInlet", "Pressure Inlet"))
        .with_child(zone);

    let model = load(base);
    let zone = &model.zones[0];

    let solid = zone.sections.iter().find(|s| s.name == "Solid").unwrap();
    assert!(solid.boundary.is_none());

    let inlet = zone.sections.iter().find(|s| s.name == "Inlet").unwrap();
    let boundary = inlet.boundary.as_ref().expect("boundary attached");
    assert_eq!(boundary.display_name, "Pressure Inlet");
}

#[test]
fn family_miss_uses_decoded_text_verbatim() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Outlet"))
        .with_child(
            CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(bc_with_family("Outlet", "FamOutlet")),
        );
    // No Family_t declarations in the base.
    let base = CgnsNode::new("Base", "CGNSBase_t").with_child(zone);

    let model = load(base);
    let boundary = model.zones[0].sections[0].boundary.as_ref().unwrap();
    assert_eq!(boundary.display_name, "FamOutlet");
}

#[test]
fn bc_name_falls_back_to_enclosing_family_group() {
    // The BC carries no FamilyName payload, but its own name matches a family
    // with a decodable display name.
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Wing"))
        .with_child(CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(bc("Wing")));
    let base = CgnsNode::new("Base", "CGNSBase_t")
        .with_child(family("Wing", "Wing Surface"))
        .with_child(zone);

    let model = load(base);
    let boundary = model.zones[0].sections[0].boundary.as_ref().unwrap();
    assert_eq!(boundary.display_name, "Wing Surface");
}

#[test]
fn bc_without_family_uses_matched_candidate_name() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Symmetry"))
        .with_child(CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(bc(" Symmetry ")));
    let base = CgnsNode::new("Base", "CGNSBase_t").with_child(zone);

    let model = load(base);
    let boundary = model.zones[0].sections[0].boundary.as_ref().unwrap();
    assert_eq!(boundary.display_name, "Symmetry");
}

#[test]
fn duplicate_names_pair_fifo_in_declaration_order() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Wall"))
        .with_child(surface_section("Wall"))
        .with_child(
            CgnsNode::new("ZoneBC", "ZoneBC_t")
                .with_child(bc_with_family("Wall", "FamA"))
                .with_child(bc_with_family("Wall", "FamB")),
        );
    let base = CgnsNode::new("Base", "CGNSBase_t").with_child(zone);

    let model = load(base);
    let zone = &model.zones[0];
    let names: Vec<_> = zone
        .sections
        .iter()
        .map(|s| s.boundary.as_ref().unwrap().display_name.as_str())
        .collect();
    // First declared section takes the first declared BC, never both the same.
    assert_eq!(names, ["FamA", "FamB"]);
}

#[test]
fn unmatched_bc_is_ignored() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(volume_section("Solid"))
        .with_child(CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(bc("NoSuchSection")));
    let base = CgnsNode::new("Base", "CGNSBase_t").with_child(zone);

    let model = load(base);
    assert!(model.zones[0].sections[0].boundary.is_none());
}

#[test]
fn grid_location_is_carried_verbatim() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Inlet"))
        .with_child(
            CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(
                bc("Inlet").with_child(
                    CgnsNode::new("GridLocation", "GridLocation_t")
                        .with_payload(Payload::Bytes(b"FaceCenter\0\0".to_vec())),
                ),
            ),
        );
    let base = CgnsNode::new("Base", "CGNSBase_t").with_child(zone);

    let model = load(base);
    let boundary = model.zones[0].sections[0].boundary.as_ref().unwrap();
    assert_eq!(boundary.grid_location.as_deref(), Some("FaceCenter"));
}

#[test]
fn missing_grid_location_stays_none() {
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Inlet"))
        .with_child(CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(bc("Inlet")));
    let base = CgnsNode::new("Base", "CGNSBase_t").with_child(zone);

    let model = load(base);
    let boundary = model.zones[0].sections[0].boundary.as_ref().unwrap();
    assert!(boundary.grid_location.is_none());
}

#[test]
fn family_name_as_char_codes_decodes() {
    // Some writers store FamilyName as an array of character codes.
    let codes: Vec<i64> = "FamInlet".bytes().map(i64::from).chain([0, 0]).collect();
    let zone = CgnsNode::new("Zone", "Zone_t")
        .with_child(coordinates())
        .with_child(surface_section("Inlet"))
        .with_child(
            CgnsNode::new("ZoneBC", "ZoneBC_t").with_child(
                bc("Inlet").with_child(
                    CgnsNode::new("FamilyName", "FamilyName_t")
                        .with_payload(Payload::I64(codes)),
                ),
            ),
        );
    let base = CgnsNode::new("Base", "CGNSBase_t")
        .with_child(family("FamInlet", "Pressure Inlet"))
        .with_child(zone);

    let model = load(base);
    let boundary = model.zones[0].sections[0].boundary.as_ref().unwrap();
    assert_eq!(boundary.display_name, "Pressure Inlet");
}
