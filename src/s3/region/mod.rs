use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// https://docs.aws.amazon.com/general/latest/gr/rande.html#regional-endpoints
macro_rules! regions {
    ($($variant:ident => $name:literal,)+) => {
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Region {
            $($variant,)+
            /// S3-compatible provider, `endpoint` is `host[:port]` with an optional scheme
            Custom { name: String, endpoint: String },
        }

        impl Region {
            #[must_use]
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::Custom { name, .. } => name,
                }
            }
        }

        impl FromStr for Region {
            type Err = ParseRegionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ParseRegionError::new(s)),
                }
            }
        }
    };
}

regions! {
    AfSouth1 => "af-south-1",
    ApEast1 => "ap-east-1",
    ApNortheast1 => "ap-northeast-1",
    ApNortheast2 => "ap-northeast-2",
    ApNortheast3 => "ap-northeast-3",
    ApSouth1 => "ap-south-1",
    ApSouth2 => "ap-south-2",
    ApSoutheast1 => "ap-southeast-1",
    ApSoutheast2 => "ap-southeast-2",
    ApSoutheast3 => "ap-southeast-3",
    ApSoutheast4 => "ap-southeast-4",
    CaCentral1 => "ca-central-1",
    CnNorth1 => "cn-north-1",
    CnNorthwest1 => "cn-northwest-1",
    EuCentral1 => "eu-central-1",
    EuCentral2 => "eu-central-2",
    EuNorth1 => "eu-north-1",
    EuSouth1 => "eu-south-1",
    EuSouth2 => "eu-south-2",
    EuWest1 => "eu-west-1",
    EuWest2 => "eu-west-2",
    EuWest3 => "eu-west-3",
    IlCentral1 => "il-central-1",
    MeCentral1 => "me-central-1",
    MeSouth1 => "me-south-1",
    SaEast1 => "sa-east-1",
    UsEast1 => "us-east-1",
    UsEast2 => "us-east-2",
    UsGovEast1 => "us-gov-east-1",
    UsGovWest1 => "us-gov-west-1",
    UsWest1 => "us-west-1",
    UsWest2 => "us-west-2",
}

impl Region {
    /// Endpoint as configured, without scheme for the AWS regions
    #[must_use]
    pub fn endpoint(&self) -> String {
        match self {
            Self::Custom { endpoint, .. } => endpoint.clone(),
            Self::CnNorth1 | Self::CnNorthwest1 => format!("s3.{}.amazonaws.com.cn", self.name()),
            _ => format!("s3.{}.amazonaws.com", self.name()),
        }
    }

    /// Endpoint with scheme, `https` unless the custom endpoint says otherwise
    #[must_use]
    pub fn base_url(&self) -> String {
        let endpoint = self.endpoint();
        let endpoint = endpoint.trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("https://{endpoint}")
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{} ({})", self.name(), self.endpoint())
    }
}

/// An error produced when attempting to convert a `str` into a `Region` fails.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseRegionError {
    message: String,
}

impl ParseRegionError {
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            message: format!("Not a valid AWS region: {input}"),
        }
    }
}

impl Error for ParseRegionError {}

impl Display for ParseRegionError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.message)
    }
}

impl Default for Region {
    fn default() -> Self {
        match std::env::var("AWS_DEFAULT_REGION").or_else(|_| std::env::var("AWS_REGION")) {
            Ok(ref v) => Self::from_str(v).unwrap_or(Self::UsEast1),
            Err(_) => Self::UsEast1,
        }
    }
}
