use actix_web::web;

use crate::handlers::{
    home::home,
    profile::{
        add_project, add_tested_skill, delete_list_item, delete_project, get_profile,
        merge_badges, patch_skills, update_field,
    },
    sync::{sync_codechef, sync_leetcode},
    system::health_check,
};

/// Registers the whole HTTP surface. Fixed-path routes under `/profile` go in
/// ahead of the generic `/{field}` and `/{profile_id}` matchers, otherwise
/// `badges`/`projects`/`skills` requests would fall through to the field
/// update policy and be rejected.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/profile")
            .service(merge_badges)
            .service(add_project)
            .service(delete_project)
            .service(add_tested_skill)
            .service(patch_skills)
            .service(update_field)
            .service(get_profile)
            .service(delete_list_item),
    );

    cfg.service(sync_codechef);
    cfg.service(sync_leetcode);
}
