use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ParamsError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidPayload = 3,
    VersionOverflow = 4,
}
