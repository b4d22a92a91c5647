use web_sys::window;
use yew::prelude::*;

use crate::effects::nav::SECTION_IDS;

#[derive(Properties, PartialEq)]
struct StatProps {
    value: u32,
    #[prop_or_default]
    suffix: AttrValue,
    label: AttrValue,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    // The leading text node is what the counter animation rewrites.
    html! {
        <div class="stat" data-count={props.value.to_string()}>
            {"0"}
            <span class="stat-suffix">{props.suffix.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    period: AttrValue,
    role: AttrValue,
    org: AttrValue,
    summary: AttrValue,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    html! {
        <article class="timeline-item">
            <span class="timeline-period">{props.period.clone()}</span>
            <h3>{props.role.clone()}</h3>
            <p class="timeline-org">{props.org.clone()}</p>
            <p>{props.summary.clone()}</p>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    title: AttrValue,
    items: AttrValue,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    html! {
        <div class="skill-card card-3d">
            <h3>{props.title.clone()}</h3>
            <p>{props.items.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AchieveCardProps {
    title: AttrValue,
    detail: AttrValue,
}

#[function_component(AchieveCard)]
fn achieve_card(props: &AchieveCardProps) -> Html {
    html! {
        <div class="achieve-card">
            <h3>{props.title.clone()}</h3>
            <p>{props.detail.clone()}</p>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    {
        use_effect_with((), move |_| {
            crate::enhance::install();
            || ()
        });
    }

    html! {
        <>
            <canvas id="bg-canvas" class="bg-canvas" aria-hidden="true"></canvas>
            <div id="cursor" class="cursor" aria-hidden="true"></div>

            <nav id="main-nav" class="navbar" aria-label="Primary">
                <a class="brand" href="#hero">{"JR"}</a>
                <ul class="nav-links">
                    <li><a href="#about">{"About"}</a></li>
                    <li><a href="#experience">{"Experience"}</a></li>
                    <li><a href="#skills">{"Skills"}</a></li>
                    <li><a href="#contact">{"Contact"}</a></li>
                </ul>
            </nav>

            <aside class="nav-dots" aria-label="Section navigation">
                {
                    SECTION_IDS.iter().map(|id| html! {
                        <button
                            key={*id}
                            class="nav-dot"
                            type="button"
                            aria-label={format!("Go to {id}")}
                        />
                    }).collect::<Html>()
                }
            </aside>

            <main>
                <section id="hero" class="hero">
                    <p class="hero-kicker">{"Hello, I am"}</p>
                    <h1>{"Jonas Reinholt"}</h1>
                    <p class="hero-tagline">
                        {"Infrastructure engineer building quiet, dependable systems — and the occasional loud website."}
                    </p>
                    <div class="hero-actions">
                        <a class="btn" href="#experience">{"See my work"}</a>
                        <a class="btn btn-ghost" href="#contact">{"Get in touch"}</a>
                    </div>
                </section>

                <section id="about" class="section">
                    <h2>{"About"}</h2>
                    <div class="about-grid">
                        <div class="photo-wrap">
                            <div id="photo-frame" class="photo-frame">
                                <span class="photo-initials">{"JR"}</span>
                            </div>
                        </div>
                        <div class="about-copy">
                            <p>
                                {"I spend my days keeping fleets of unremarkable servers unremarkable: \
                                  provisioning, observability, and the tooling that lets small teams run \
                                  big systems without pagers ruining their weekends."}
                            </p>
                            <p>
                                {"Previously I built billing pipelines and deployment tooling; these days \
                                  I care most about making infrastructure boring enough to forget."}
                            </p>
                            <div class="about-stats">
                                <Stat value={12} suffix="+" label="projects shipped" />
                                <Stat value={250} suffix="+" label="code reviews" />
                                <Stat value={6} label="years in production" />
                            </div>
                        </div>
                    </div>
                </section>

                <section id="experience" class="section">
                    <h2>{"Experience"}</h2>
                    <div class="timeline">
                        <TimelineItem
                            period="2022 — now"
                            role="Senior Infrastructure Engineer"
                            org="Fernweh Logistics"
                            summary="Own the provisioning and observability stack for a 400-node fleet; cut mean time to recovery from hours to minutes."
                        />
                        <TimelineItem
                            period="2019 — 2022"
                            role="Platform Engineer"
                            org="Kastanie Payments"
                            summary="Built the deployment pipeline and the billing reconciliation service that closed the books every night without anyone watching."
                        />
                        <TimelineItem
                            period="2017 — 2019"
                            role="Backend Developer"
                            org="Studio Nordlicht"
                            summary="Shipped APIs and integrations for client projects; learned that the best feature is the one support never hears about."
                        />
                    </div>
                </section>

                <section id="skills" class="section">
                    <h2>{"Skills"}</h2>
                    <div class="skills-grid">
                        <SkillCard title="Infrastructure" items="Kubernetes, Terraform, Nomad, bare metal when it matters" />
                        <SkillCard title="Languages" items="Rust, Go, Python, enough shell to be dangerous" />
                        <SkillCard title="Observability" items="Prometheus, Grafana, OpenTelemetry, structured logs everywhere" />
                        <SkillCard title="Data & Messaging" items="PostgreSQL, Kafka, Redis, S3-shaped object stores" />
                    </div>
                </section>

                <section id="education" class="section">
                    <h2>{"Education & Achievements"}</h2>
                    <p class="education-line">
                        {"B.Sc. Computer Science — University of Hamburg, 2017"}
                    </p>
                    <div class="achieve-grid">
                        <AchieveCard
                            title="CKA"
                            detail="Certified Kubernetes Administrator, renewed 2024."
                        />
                        <AchieveCard
                            title="Incident write-ups"
                            detail="Internal postmortem series adopted company-wide as the template."
                        />
                        <AchieveCard
                            title="Conference talk"
                            detail="\"Boring by Design\" — ContainerDays 2023."
                        />
                    </div>
                </section>

                <section id="contact" class="section contact">
                    <h2>{"Contact"}</h2>
                    <p>{"The inbox is open — infrastructure woes, Rust questions, or just to say hello."}</p>
                    <a class="btn" href="mailto:jonas@reinholt.dev">{"jonas@reinholt.dev"}</a>
                </section>
            </main>

            <footer class="footer">
                <p>{"Built in Rust, rendered in your browser."}</p>
            </footer>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
