use crate::{
    api::{attendance, late_stay, reports},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let api_limiter = build_limiter(config.rate_api_per_min);

    // Liveness probe stays outside the prefixed (and rate-limited) scope
    cfg.service(web::resource("/health").route(web::get().to(reports::health)));

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter)
            .service(
                web::scope("/attendance")
                    .service(
                        web::resource("/summary")
                            .route(web::get().to(attendance::get_attendance_summary)),
                    )
                    .service(
                        web::resource("/records")
                            .route(web::get().to(attendance::get_attendance_records)),
                    )
                    .service(
                        web::resource("/daily-count")
                            .route(web::get().to(attendance::get_daily_count)),
                    ),
            )
            .service(
                web::scope("/late-stay")
                    .service(
                        web::resource("/after-8pm")
                            .route(web::get().to(late_stay::get_late_stay_after_8pm)),
                    )
                    .service(
                        web::resource("/women-after-8pm")
                            .route(web::get().to(late_stay::get_women_late_stay)),
                    ),
            )
            .service(
                web::scope("/reports")
                    .service(
                        web::resource("/work-balance/project/{project_id}")
                            .route(web::get().to(reports::get_work_balance_by_project)),
                    )
                    .service(
                        web::resource("/wfo-compliance")
                            .route(web::get().to(reports::get_wfo_compliance)),
                    )
                    .service(
                        web::resource("/wellbeing-recommendations")
                            .route(web::get().to(reports::get_wellbeing_recommendations)),
                    ),
            ),
    );
}
