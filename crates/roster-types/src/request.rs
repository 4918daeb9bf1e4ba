/// Dispatcher input as collected from the command line. Flags the user did
/// not pass stay `None` so presence checks happen in one place.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub operation: Option<String>,
    pub file_name: Option<String>,
    pub item: Option<String>,
    pub id: Option<String>,
}
