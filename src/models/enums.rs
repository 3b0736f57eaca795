use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde goes through the same strings, so the stored JSON carries the
/// display form (e.g. `"Gum Swelling"`).
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(Symptom {
    Toothache => "Toothache",
    GumSwelling => "Gum Swelling",
    JawPain => "Jaw Pain",
    BadBreath => "Bad Breath",
    BleedingGums => "Bleeding Gums",
    Sensitivity => "Sensitivity",
});

str_enum!(ArticleLevel {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
});

str_enum!(Province {
    WesternCape => "Western Cape",
    Gauteng => "Gauteng",
    KwaZuluNatal => "KwaZulu-Natal",
    EasternCape => "Eastern Cape",
    FreeState => "Free State",
    Limpopo => "Limpopo",
    Mpumalanga => "Mpumalanga",
    NorthWest => "North West",
    NorthernCape => "Northern Cape",
    Nationwide => "Nationwide",
});

str_enum!(ResourceCategory {
    PublicDentalClinic => "Public Dental Clinic",
    CommunityHealthCenter => "Community Health Center",
    EmergencyDentalService => "Emergency Dental Service",
    NgoHealthcareProvider => "NGO Healthcare Provider",
    CrisisHelpline => "Crisis Helpline",
});

str_enum!(ChatRole {
    User => "user",
    Model => "model",
});

str_enum!(LearnTab {
    All => "all",
    Saved => "saved",
});
