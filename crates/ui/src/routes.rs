/// Screens the presentation layer navigates between.
///
/// Lesson details are addressed by title, which doubles as the lesson key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Lessons,
    Practice,
    Details { title: String },
}

const DETAILS_PREFIX: &str = "details/";

impl Route {
    /// Bottom navigation tabs, in display order.
    pub const TABS: [Route; 2] = [Route::Lessons, Route::Practice];

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Lessons => "lessons".to_string(),
            Route::Practice => "practice".to_string(),
            Route::Details { title } => format!("{DETAILS_PREFIX}{title}"),
        }
    }

    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "" | "lessons" => Some(Route::Lessons),
            "practice" => Some(Route::Practice),
            _ => path
                .strip_prefix(DETAILS_PREFIX)
                .filter(|title| !title.is_empty())
                .map(|title| Route::Details {
                    title: title.to_string(),
                }),
        }
    }

    /// Tab label; `None` for screens outside the bottom bar.
    #[must_use]
    pub fn tab_label(&self) -> Option<&'static str> {
        match self {
            Route::Lessons => Some("Lessons"),
            Route::Practice => Some("Practice"),
            Route::Details { .. } => None,
        }
    }
}
