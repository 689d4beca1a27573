use leptos::prelude::*;
use mealversity_core::content::TEAM;

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <h4 class="section-title">"Our Team"</h4>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="team-card">
                                    <div class="team-avatar">{member.initials()}</div>
                                    <div class="team-name">{member.name}</div>
                                    <div class="team-role">{member.role}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
