use leptos::prelude::*;
use mealversity_core::content::{CAREERS, ContentFilter, DEPARTMENTS, JobPosting};
use mealversity_core::modal::{ActiveModal, ModalController};

#[component]
pub fn Careers(modals: RwSignal<ModalController>) -> impl IntoView {
    let filter = RwSignal::new(ContentFilter::default());

    view! {
        <section id="career" class="careers">
            <div class="container">
                <h4 class="section-title">"Join Our Team"</h4>
                <p class="section-subtitle">
                    "Help us redefine everyday meals. We're hiring creative and marketing talent."
                </p>

                <div class="department-filter">
                    {DEPARTMENTS
                        .into_iter()
                        .map(|dept| {
                            view! {
                                <button
                                    class="department-chip"
                                    class:active=move || filter.with(|f| f.selected() == dept)
                                    on:click=move |_| filter.update(|f| f.select_filter(dept))
                                >
                                    {dept}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="job-grid">
                    {move || {
                        filter
                            .with(|f| f.apply(CAREERS, |job| job.department))
                            .into_iter()
                            .map(|job| view! { <JobCard job=job modals=modals /> })
                            .collect_view()
                    }}
                </div>

                <div class="careers-cta">
                    <h5>"Don't see a position that fits?"</h5>
                    <p>
                        "We're always looking for talented individuals. Send us your resume and "
                        "we'll keep you in mind for future opportunities."
                    </p>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| modals.update(|m| m.open(ActiveModal::JobApplication { job: None }))
                    >
                        "Send General Application"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn JobCard(job: &'static JobPosting, modals: RwSignal<ModalController>) -> impl IntoView {
    let (shown, rest) = job.requirement_preview();

    view! {
        <article class="job-card">
            <div class="job-header">
                <span class="job-icon">{job.icon}</span>
                <div>
                    <h5 class="job-title">{job.title}</h5>
                    <span class="job-department">{job.department}</span>
                </div>
            </div>
            <div class="job-meta">
                <span>{job.employment}</span>
                <span>{job.location}</span>
            </div>
            <p class="job-description">{job.description}</p>
            <div class="job-experience">
                <span class="job-label">"Experience"</span>
                <span>{job.experience}</span>
            </div>
            <div class="job-skills">
                <span class="job-label">"Key Skills"</span>
                {shown.iter().map(|skill| view! { <span class="job-skill">{*skill}</span> }).collect_view()}
                {(rest > 0).then(|| view! { <span class="job-skill">{format!("+{rest} more")}</span> })}
            </div>
            <button
                class=format!("btn job-apply bg-gradient-to-r {}", job.color_theme)
                on:click=move |_| modals.update(|m| m.open(ActiveModal::JobApplication { job: Some(job) }))
            >
                "Apply Now"
            </button>
        </article>
    }
}
