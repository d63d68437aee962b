use approx::assert_relative_eq;
use envelope::{convert, reversed_layers, Boundary, Internal};
use std::collections::HashMap;
use test_models::{rooms, small_house};

fn internals(boundaries: &[Boundary]) -> HashMap<usize, &Internal> {
    boundaries
        .iter()
        .filter_map(|b| match b {
            Boundary::Internal(i) => Some((i.id, i)),
            _ => None,
        })
        .collect()
}

#[test]
fn mirror_pairs_are_consistent() -> Result<(), String> {
    for is_storage in [true, false] {
        let c = convert(&small_house(is_storage)).map_err(|e| e.to_string())?;
        let internals = internals(&c.assembly.boundaries);
        assert_eq!(internals.len(), 10);

        for front in internals.values() {
            let rear = internals
                .get(&front.rear_surface_boundary_id)
                .ok_or(format!("boundary {} has no rear", front.id))?;
            assert_eq!(rear.rear_surface_boundary_id, front.id);
            assert_ne!(rear.connected_room_id, front.connected_room_id);
            assert_eq!(rear.layers, reversed_layers(&front.layers));
            assert_eq!(rear.area, front.area);
            assert!((front.id as i64 - rear.id as i64).abs() == 1);
        }
    }
    Ok(())
}

#[test]
fn floor_flags_are_complemented() -> Result<(), String> {
    let c = convert(&small_house(false)).map_err(|e| e.to_string())?;
    let internals = internals(&c.assembly.boundaries);

    let attic_floor = internals
        .values()
        .find(|i| i.connected_room_id == rooms::ATTIC)
        .ok_or("no attic floor")?;
    assert!(attic_floor.is_floor);
    let ceiling = internals[&attic_floor.rear_surface_boundary_id];
    assert!(!ceiling.is_floor);
    assert_eq!(ceiling.connected_room_id, rooms::MAIN);

    let underfloor = internals
        .values()
        .find(|i| i.connected_room_id == rooms::UNDERFLOOR)
        .ok_or("no underfloor ceiling")?;
    assert!(!underfloor.is_floor);
    assert!(internals[&underfloor.rear_surface_boundary_id].is_floor);

    // Slabs between storeys are floors on both faces
    let slabs: Vec<&&Internal> = internals
        .values()
        .filter(|i| i.name == "second_floor")
        .collect();
    assert_eq!(slabs.len(), 2);
    assert!(slabs.iter().all(|i| i.is_floor));
    Ok(())
}

#[test]
fn storage_adds_concrete() -> Result<(), String> {
    let with = convert(&small_house(true)).map_err(|e| e.to_string())?;
    let without = convert(&small_house(false)).map_err(|e| e.to_string())?;

    let slab_layers = |b: &[Boundary]| -> Vec<String> {
        b.iter()
            .find(|b| b.name() == "second_floor")
            .and_then(|b| b.layers())
            .map(|l| l.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default()
    };
    assert_eq!(
        slab_layers(&with.assembly.boundaries),
        vec!["concrete", "plywood"]
    );
    assert_eq!(slab_layers(&without.assembly.boundaries), vec!["plywood"]);
    Ok(())
}

#[test]
fn windows_keep_their_details() -> Result<(), String> {
    let c = convert(&small_house(false)).map_err(|e| e.to_string())?;
    let factor = c.representative.window_area_factor;
    let windows: Vec<_> = c
        .assembly
        .boundaries
        .iter()
        .filter_map(|b| match b {
            Boundary::ExternalTransparentPart(w) => Some(w),
            _ => None,
        })
        .collect();
    assert_eq!(windows.len(), 3);

    let south = windows
        .iter()
        .find(|w| w.name == "window_s")
        .ok_or("no south window")?;
    assert_eq!(south.incident_angle_characteristics, "single");
    assert!(south.solar_shading_part.existence);
    assert_relative_eq!(south.area, 8.0 * factor, max_relative = 1e-12);
    assert_eq!(south.eta_value, c.representative.eta_window());

    let north = windows
        .iter()
        .find(|w| w.name == "window_n")
        .ok_or("no north window")?;
    assert_eq!(north.incident_angle_characteristics, "multiple");
    assert!(!north.solar_shading_part.existence);
    Ok(())
}

#[test]
fn json_fields_are_omitted_per_type() -> Result<(), String> {
    let c = convert(&small_house(false)).map_err(|e| e.to_string())?;
    let json = c.assembly.to_json(false).map_err(|e| e.to_string())?;
    let value: serde_json::Value = serde_json::from_str(&json).map_err(|e| e.to_string())?;

    for key in [
        "common",
        "building",
        "rooms",
        "boundaries",
        "mechanical_ventilations",
        "equipments",
    ] {
        assert!(value.get(key).is_some(), "missing '{}'", key);
    }

    let boundaries = value["boundaries"].as_array().ok_or("no boundaries")?;
    for b in boundaries {
        let obj = b.as_object().ok_or("boundary is not an object")?;
        assert!(obj.values().all(|v| !v.is_null()));
        match obj["boundary_type"].as_str() {
            Some("internal") => {
                assert!(obj.contains_key("rear_surface_boundary_id"));
                assert!(!obj.contains_key("direction"));
            }
            Some("ground") => {
                assert!(!obj.contains_key("rear_surface_boundary_id"));
                assert!(!obj.contains_key("solar_shading_part"));
            }
            Some("external_transparent_part") => {
                assert!(obj.contains_key("eta_value"));
                assert!(!obj.contains_key("layers"));
            }
            Some("external_opaque_part") => {
                assert!(obj.contains_key("u_value"));
                assert!(!obj.contains_key("layers"));
            }
            Some("external_general_part") => {
                assert!(obj.contains_key("layers"));
                assert!(!obj.contains_key("u_value"));
            }
            other => return Err(format!("unexpected boundary type {:?}", other)),
        }
    }
    Ok(())
}
