use crate::error::ParseError;
use crate::types::EndpointSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone)]
pub struct ParsedEndpoints {
    pub endpoints: Vec<EndpointSpec>,
    pub format: SourceFormat,
}

pub fn parse_endpoints_str(
    input: &str,
    format: SourceFormat,
) -> Result<ParsedEndpoints, ParseError> {
    match format {
        SourceFormat::Json => Ok(ParsedEndpoints {
            endpoints: serde_json::from_str::<Vec<EndpointSpec>>(input)?,
            format,
        }),
        SourceFormat::Yaml => Ok(ParsedEndpoints {
            endpoints: serde_yaml::from_str::<Vec<EndpointSpec>>(input)?,
            format,
        }),
        SourceFormat::Auto => parse_endpoints_auto(input),
    }
}

fn parse_endpoints_auto(input: &str) -> Result<ParsedEndpoints, ParseError> {
    // Heuristic: JSON always starts with `[` or `{` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<Vec<EndpointSpec>>(input) {
            Ok(endpoints) => Ok(ParsedEndpoints {
                endpoints,
                format: SourceFormat::Json,
            }),
            Err(e) => match serde_yaml::from_str::<Vec<EndpointSpec>>(input) {
                Ok(endpoints) => Ok(ParsedEndpoints {
                    endpoints,
                    format: SourceFormat::Yaml,
                }),
                // Report the JSON error since JSON was tried first.
                Err(_) => Err(ParseError::Json(e)),
            },
        }
    } else {
        match serde_yaml::from_str::<Vec<EndpointSpec>>(input) {
            Ok(endpoints) => Ok(ParsedEndpoints {
                endpoints,
                format: SourceFormat::Yaml,
            }),
            Err(e) => Err(ParseError::Yaml(e)),
        }
    }
}
