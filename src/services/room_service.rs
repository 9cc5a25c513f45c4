use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::{authorize, Action, Claims, Identity, ResourceRef},
    errors::{AppError, AppResult},
    models::{
        domain::{Enrollment, Room},
        dto::request::{CreateRoomRequest, EnrollStudentRequest},
        dto::response::RoomDto,
    },
    repositories::{EnrollmentRepository, RoomRepository},
    services::room_not_found,
};

pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomRepository>, enrollments: Arc<dyn EnrollmentRepository>) -> Self {
        Self { rooms, enrollments }
    }

    pub async fn create_room(&self, claims: &Claims, request: CreateRoomRequest) -> AppResult<Room> {
        request.validate()?;

        let identity = Identity::from(claims);
        authorize(&identity, Action::CreateRoom, &ResourceRef::none()).require("Room not found")?;

        let room = Room::new(&request.name, &identity.principal);
        let room = self.rooms.create(room).await?;
        log::info!(
            "Created room '{}' ({}) for institute '{}'",
            room.name,
            room.id,
            room.institute_id
        );

        Ok(room)
    }

    pub async fn list_rooms(&self, claims: &Claims) -> AppResult<Vec<RoomDto>> {
        let identity = Identity::from(claims);
        authorize(
            &identity,
            Action::ListRooms,
            &ResourceRef::owned_by(&identity.principal),
        )
        .require("Rooms not found")?;

        // The query is scoped to the caller's institute on top of the
        // policy check.
        let rooms = self.rooms.list_by_institute(&identity.principal).await?;

        let mut dtos = Vec::with_capacity(rooms.len());
        for room in rooms {
            let students = self
                .enrollments
                .list_by_room(&room.id)
                .await?
                .into_iter()
                .map(|e| e.email)
                .collect();
            dtos.push(RoomDto::with_students(room, students));
        }

        Ok(dtos)
    }

    pub async fn enroll_student(
        &self,
        claims: &Claims,
        room_id: &str,
        request: EnrollStudentRequest,
    ) -> AppResult<Enrollment> {
        request.validate()?;

        let identity = Identity::from(claims);
        let not_found = room_not_found(room_id);

        // The role gate runs before the room lookup: a role-denied caller
        // must learn nothing about whether the room exists.
        authorize(&identity, Action::EnrollStudent, &ResourceRef::none()).require(&not_found)?;

        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(not_found.clone()))?;

        authorize(
            &identity,
            Action::EnrollStudent,
            &ResourceRef::owned_by(&room.institute_id),
        )
        .require(&not_found)?;

        let enrollment = self
            .enrollments
            .create(Enrollment::new(room_id, &request.email))
            .await?;
        log::info!("Enrolled '{}' in room '{}'", enrollment.email, room_id);

        Ok(enrollment)
    }
}
