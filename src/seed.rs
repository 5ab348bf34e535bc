use crate::models::{DayTasks, Task};
use chrono::NaiveDate;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// The briefing dataset shipped with the service.
pub fn builtin_seed() -> DayTasks {
    let mut days = DayTasks::new();
    if let Some(date) = NaiveDate::from_ymd_opt(2024, 7, 16) {
        days.insert(
            date,
            vec![
                Task {
                    id: 1,
                    title: "הדרכה 1".to_string(),
                    subtitle: "העברת מסמכים לשרת בירושלים".to_string(),
                    description: "נא לשים לב שכל מסמך שעובר לשרת בירושלים בנוסף לשם הלקוח צריך להוסיף מספר פלאפון".to_string(),
                    image_url: None,
                    read: false,
                },
                Task {
                    id: 2,
                    title: "הדרכה 2".to_string(),
                    subtitle: "קבלת מסמכים דרך שרת דיסק אונקי".to_string(),
                    description: "קבלת הקבצים מהדיסק אונקי מתאפשרת רק שהדיסק מחובר לכונן כרגע מונחים הלקוחות ע'י מרדכי מרגלית לחבר את הדיסק לכונן ולהתקשר למשרד, הנציג צריך להכנס לתוך התיקייה לבקש מהלקוח את שם הקובץ ולהעתיק את הקובץ אלינו, כל עוד הקובץ לא הועתק אלינו לא תתאפשר פתיחה של הקובץ, רק אחרי העברה למחשב אפשר יהיה לפתוח אותו ולטפל  ".to_string(),
                    image_url: None,
                    read: false,
                },
            ],
        );
    }
    days
}

/// Loads the seed from a JSON file shaped like `{"2024-07-16": [task, ...]}`.
///
/// Without a path, or when the file is missing or broken, the built-in seed is
/// used instead.
pub async fn load_seed(path: Option<&Path>) -> DayTasks {
    let Some(path) = path else {
        return builtin_seed();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<DayTasks>(&bytes) {
            Ok(days) => {
                info!("loaded {} briefing day(s) from {}", days.len(), path.display());
                days
            }
            Err(err) => {
                error!("failed to parse seed file: {err}");
                builtin_seed()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => builtin_seed(),
        Err(err) => {
            error!("failed to read seed file: {err}");
            builtin_seed()
        }
    }
}
