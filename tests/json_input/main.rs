use envelope::run_conversion::{read_input, run, ConvertOptions};
use envelope::{convert, Boundary, EnvelopeAssembly};

const INPUT: &str = "./tests/json_input/two_rooms.json5";

#[test]
fn read_and_convert() -> Result<(), String> {
    let input = read_input(INPUT).map_err(|e| e.to_string())?;
    assert_eq!(input.rooms.len(), 2);
    assert_eq!(input.common.ac_method, "simple");

    let c = convert(&input).map_err(|e| e.to_string())?;
    let a = &c.assembly;

    // The zero-area door is gone
    assert!(a.boundaries.iter().all(|b| b.name() != "back_door"));

    let types: Vec<&str> = a.boundaries.iter().map(|b| b.boundary_type()).collect();
    assert_eq!(
        types,
        vec![
            "external_general_part",
            "external_general_part",
            "external_general_part",
            "external_opaque_part",
            "external_transparent_part",
            "internal",
            "internal",
            "ground",
        ]
    );

    match &a.boundaries[3] {
        Boundary::ExternalOpaquePart(roof) => {
            assert_eq!(roof.u_value, c.representative.u_values.ceiling);
        }
        _ => return Err("expecting a roof".to_string()),
    }
    Ok(())
}

#[test]
fn run_writes_json() -> Result<(), String> {
    let options = ConvertOptions {
        input_file: INPUT.to_string(),
        output: None,
        pretty: true,
    };
    let mut out: Vec<u8> = Vec::new();
    run(&options, &mut out).map_err(|e| e.to_string())?;

    let json = String::from_utf8(out).map_err(|e| e.to_string())?;
    assert!(json.contains("\n  \"common\""));

    let a = EnvelopeAssembly::from_json(&json).map_err(|e| e.to_string())?;
    a.validate().map_err(|e| e.to_string())?;
    assert_eq!(a.rooms.len(), 2);
    assert_eq!(a.rooms[0].furniture.input_method, "specify");
    Ok(())
}
