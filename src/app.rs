//! LMS Admin Frontend App
//!
//! Application shell: navbar + sidebar + the active screen, switched by
//! the `Screen` enum in context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AddCourse, AddTemplate, ChangePassword, CourseOrders, Dashboard, DefaultSettings, EditCourse,
    EditProfile, EditTemplate, LogoManagement, MainCategories, ManageUsers, Navbar, Sidebar,
    SubCategories, ToastHost, ViewCourses, ViewPayments, ViewTemplates,
};
use crate::context::{AppContext, AuthTokens, Screen, Toast};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (screen, set_screen) = signal(Screen::Dashboard);
    let (toast, set_toast) = signal::<Option<Toast>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (screen, set_screen),
        (toast, set_toast),
    ));
    provide_context(AuthTokens::from_local_storage());
    provide_context(Store::new(AppState::default()));

    view! {
        <div class="app-layout">
            <Sidebar/>

            <div class="main-column">
                <Navbar/>
                <ToastHost/>

                <main class="main-content">
                    {move || match screen.get() {
                        Screen::Dashboard => view! { <Dashboard/> }.into_any(),
                        Screen::ManageUsers => view! { <ManageUsers/> }.into_any(),
                        Screen::MainCategories => view! { <MainCategories/> }.into_any(),
                        Screen::SubCategories => view! { <SubCategories/> }.into_any(),
                        Screen::ViewCourses => view! { <ViewCourses/> }.into_any(),
                        Screen::AddCourse => view! { <AddCourse/> }.into_any(),
                        Screen::EditCourse(id) => view! { <EditCourse id=id/> }.into_any(),
                        Screen::ViewTemplates => view! { <ViewTemplates/> }.into_any(),
                        Screen::AddTemplate => view! { <AddTemplate/> }.into_any(),
                        Screen::EditTemplate(id) => view! { <EditTemplate id=id/> }.into_any(),
                        Screen::ViewPayments => view! { <ViewPayments/> }.into_any(),
                        Screen::CourseOrders => view! { <CourseOrders/> }.into_any(),
                        Screen::DefaultSettings => view! { <DefaultSettings/> }.into_any(),
                        Screen::LogoManagement => view! { <LogoManagement/> }.into_any(),
                        Screen::ChangePassword => view! { <ChangePassword/> }.into_any(),
                        Screen::EditProfile => view! { <EditProfile/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
