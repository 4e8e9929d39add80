mod portal;
