use strum_macros::{Display, EnumString};
/// Enum for all endpoints of the Hypixel API used by the flipper
#[derive(EnumString, Display, Copy, Clone, Debug, PartialEq)]
pub enum Endpoint {
    #[strum(serialize = "/key")]
    Key,
    #[strum(serialize = "/skyblock/bazaar")]
    Bazaar,
}
