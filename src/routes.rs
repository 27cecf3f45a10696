use crate::{
    api::{attendance, employee, overview, welcome},
    service::Services,
};
use actix_web::web::{self, Data};

pub fn configure(cfg: &mut web::ServiceConfig, services: Services) {
    cfg.app_data(Data::new(services.employees))
        .app_data(Data::new(services.attendance))
        .app_data(Data::new(services.overview));

    cfg.service(web::resource("/").route(web::get().to(welcome::welcome)))
        // /employees
        .service(web::resource("/employees").route(web::get().to(employee::list_employees)))
        // /employees/{id}/attendance
        .service(
            web::resource("/employees/{employee_id}/attendance")
                .route(web::get().to(attendance::list_attendance)),
        )
        // /add_employee
        .service(
            web::resource("/add_employee")
                .route(web::get().to(employee::add_employee_form))
                .route(web::post().to(employee::add_employee)),
        )
        // /update_attendance/{id}
        .service(
            web::resource("/update_attendance/{employee_id}")
                .route(web::post().to(attendance::update_attendance)),
        )
        // /overview/{department}
        .service(
            web::resource("/overview/{department}").route(web::get().to(overview::overview)),
        );
}
