use crate::shared::icons;
use contracts::domain::resource_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Menu sections and the controller names listed under each.
pub const MENU_GROUPS: &[(&str, &[&str])] = &[
    ("Organization", &["Department", "Designation", "Employee", "Instructor"]),
    ("Courses", &["Course", "CourseCombo", "Offer"]),
    (
        "Scheduling",
        &["ClassRoom", "Day", "Slot", "Batch", "ClassSchedule"],
    ),
    (
        "Enrollment",
        &["Visitor", "Registration", "Admission", "Trainee", "BatchTransfer"],
    ),
    (
        "Training",
        &["Attendance", "Assessment", "Recommendation", "Certificate"],
    ),
    ("Accounts", &["MoneyReceipt", "DailySalesRecord"]),
];

fn group_icon(title: &str) -> AnyView {
    icons::icon(match title {
        "Organization" => "building",
        "Courses" => "book",
        "Scheduling" => "calendar",
        "Enrollment" => "users",
        "Training" => "award",
        _ => "wallet",
    })
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <A href="/" attr:class="main-nav-bar__home">
                {icons::icon("home")}
                <span>"Dashboard"</span>
            </A>
            {MENU_GROUPS
                .iter()
                .map(|(title, names)| {
                    view! {
                        <div class="main-nav-bar__group">
                            <div class="main-nav-bar__group-title">
                                {group_icon(title)}
                                <span>{*title}</span>
                            </div>
                            <ul>
                                {names
                                    .iter()
                                    .filter_map(|name| resource_info(name))
                                    .map(|info| {
                                        view! {
                                            <li>
                                                <A href=format!("/{}", info.route)>{info.list_name}</A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::RESOURCES;

    #[test]
    fn test_menu_lists_every_resource_once() {
        let listed: Vec<&str> = MENU_GROUPS.iter().flat_map(|(_, names)| names.iter().copied()).collect();
        assert_eq!(listed.len(), RESOURCES.len());
        for info in RESOURCES {
            assert!(listed.contains(&info.name), "{} missing from menu", info.name);
        }
    }
}
