/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::assembly::{assemble, validate_rooms};
use clap::Parser;
use model::{ConversionError, ConversionInput, EnvelopeAssembly};
use regulation::{AzimuthalCoefficients, RepresentativeValues, SolarCorrectionFactors};
use std::fs;

/// The options we can pass to the conversion
#[derive(Parser, Default)]
#[clap(author, version, about, long_about = None)]
pub struct ConvertOptions {
    /// The input file, in JSON or JSON5 (if its
    /// extension is `.json5`) format
    #[clap(short = 'i')]
    pub input_file: String,

    /// Specifies the path to which to write the results.
    /// If none is given, STDOUT is used
    #[clap(short = 'o')]
    pub output: Option<String>,

    /// Writes indented JSON
    #[clap(short = 'p')]
    pub pretty: bool,
}

/// The result of a conversion
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The envelope, ready to be written
    pub assembly: EnvelopeAssembly,

    /// The values shared by every surface of each category
    pub representative: RepresentativeValues,
}

fn parse(content: &str, json5: bool) -> Result<ConversionInput, ConversionError> {
    if json5 {
        json5::from_str(content).map_err(|e| ConversionError::Parse(e.to_string()))
    } else {
        ConversionInput::from_json(content)
    }
}

/// Reads a [`ConversionInput`] from a file
pub fn read_input(path: &str) -> Result<ConversionInput, ConversionError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConversionError::Io(format!("Could not read file '{}': {}", path, e)))?;
    parse(&content, path.ends_with(".json5"))
}

/// Turns the tables describing a building into its envelope.
///
/// The representative U-values and solar heat gain coefficients
/// are calculated first, and then every row of the surfaces table
/// is given its construction and placed in the envelope.
pub fn convert(input: &ConversionInput) -> Result<Conversion, ConversionError> {
    let surfaces = input.parse_surfaces()?;
    validate_rooms(input, &surfaces)?;

    let azimuth = AzimuthalCoefficients::new(&input.azimuthal_coefficients);
    let correction = SolarCorrectionFactors::new(&input.solar_correction_factors);
    let representative = regulation::solve(&input.targets, &surfaces, &azimuth, &correction)?;

    let assembly = assemble(input, &surfaces, &representative)?;
    Ok(Conversion {
        assembly,
        representative,
    })
}

fn render(options: &ConvertOptions) -> Result<String, ConversionError> {
    let input = read_input(&options.input_file)?;
    let conversion = convert(&input)?;

    let r = &conversion.representative;
    eprintln!(
        "  ... f_u = {:.3}, f_eta = {:.3}, {} boundaries",
        r.f_u,
        r.f_eta,
        conversion.assembly.boundaries.len()
    );

    let mut json = conversion.assembly.to_json(options.pretty)?;
    json.push('\n');
    Ok(json)
}

/// This function drives the conversion: it reads the input,
/// converts it and writes the result into `out`. Nothing is
/// written if the conversion fails.
pub fn run<T>(options: &ConvertOptions, mut out: T) -> Result<(), ConversionError>
where
    T: std::io::Write,
{
    let json = render(options)?;
    out.write_all(json.as_bytes())
        .map_err(|e| ConversionError::Io(format!("Could not write the output: {}", e)))
}

/// Runs the conversion and writes the results into the file
/// given in `options.output`, or into STDOUT if there is none.
///
/// The file is only created once the conversion has succeeded.
pub fn run_to_output(options: &ConvertOptions) -> Result<(), ConversionError> {
    let json = render(options)?;
    match &options.output {
        Some(path) => fs::write(path, json)
            .map_err(|e| ConversionError::Io(format!("Could not write file '{}': {}", path, e))),
        None => {
            use std::io::Write;
            std::io::stdout()
                .lock()
                .write_all(json.as_bytes())
                .map_err(|e| ConversionError::Io(format!("Could not write the output: {}", e)))
        }
    }
}

/***********/
/* TESTING */
/***********/

#[cfg(test)]
mod testing {
    use super::*;
    use test_models::{single_room, small_house, SingleRoomOptions};

    #[test]
    fn test_convert() -> Result<(), String> {
        let c = convert(&small_house(false)).map_err(|e| e.to_string())?;
        assert_eq!(c.assembly.boundaries.len(), 23);
        assert!(c.representative.f_u > 0.0);
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<(), String> {
        let input = small_house(true);
        let a = convert(&input).map_err(|e| e.to_string())?;
        let b = convert(&input).map_err(|e| e.to_string())?;
        let a = a.assembly.to_json(false).map_err(|e| e.to_string())?;
        let b = b.assembly.to_json(false).map_err(|e| e.to_string())?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), String> {
        let input = single_room(&SingleRoomOptions::default());
        let json = serde_json::to_string(&input).map_err(|e| e.to_string())?;
        let back = parse(&json, false).map_err(|e| e.to_string())?;
        assert_eq!(back, input);
        // JSON is also JSON5
        let back = parse(&json, true).map_err(|e| e.to_string())?;
        assert_eq!(back.surfaces.len(), 2);

        let e = parse("{not json", false);
        assert!(matches!(e, Err(ConversionError::Parse(_))));
        Ok(())
    }

    #[test]
    fn test_errors_abort() {
        let mut input = single_room(&SingleRoomOptions::default());
        input.surfaces[1].direction = Some("up".to_string());
        assert_eq!(
            convert(&input).err(),
            Some(ConversionError::UnknownDirection {
                row: 1,
                tag: "up".to_string()
            })
        );

        let e = read_input("./this/file/does/not/exist.json");
        assert!(matches!(e, Err(ConversionError::Io(_))));
    }

    #[test]
    fn test_failed_conversion_writes_nothing() -> Result<(), String> {
        let dir = std::env::temp_dir();
        let input_file = dir.join("envelope_bad_region_input.json");
        let output = dir.join("envelope_bad_region_output.json");
        let _ = fs::remove_file(&output);

        let mut input = single_room(&SingleRoomOptions::default());
        input.targets.region = 9;
        let json = serde_json::to_string(&input).map_err(|e| e.to_string())?;
        fs::write(&input_file, json).map_err(|e| e.to_string())?;

        let mut options = ConvertOptions {
            input_file: input_file.to_string_lossy().to_string(),
            output: Some(output.to_string_lossy().to_string()),
            pretty: false,
        };
        let e = run_to_output(&options);
        assert_eq!(e, Err(ConversionError::InvalidRegion(9)));
        assert!(!output.exists());

        let mut out: Vec<u8> = Vec::new();
        assert!(run(&options, &mut out).is_err());
        assert!(out.is_empty());

        // Once the input is fixed, the file is written
        input.targets.region = 6;
        let json = serde_json::to_string(&input).map_err(|e| e.to_string())?;
        fs::write(&input_file, json).map_err(|e| e.to_string())?;
        options.pretty = true;
        run_to_output(&options).map_err(|e| e.to_string())?;
        let written = fs::read_to_string(&output).map_err(|e| e.to_string())?;
        assert!(written.ends_with("}\n"));

        let _ = fs::remove_file(&input_file);
        let _ = fs::remove_file(&output);
        Ok(())
    }
}
